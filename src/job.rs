use chrono::NaiveDate;

use crate::ai::ImageGenerator;
use crate::catalog::ContentCatalog;
use crate::error::{AppError, Result};
use crate::services::Notifier;
use crate::store::StateStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { index: usize, date: NaiveDate },
    AlreadyRan { date: NaiveDate },
}

/// One daily run: pick the next catalog item, generate, mail, then advance
/// the cursor. State is only written once both external steps succeed.
pub struct Job {
    store: StateStore,
    catalog: ContentCatalog,
    generator: Option<Box<dyn ImageGenerator>>,
    notifier: Option<Box<dyn Notifier>>,
    recipient: Option<String>,
}

impl Job {
    pub fn new(
        store: StateStore,
        catalog: ContentCatalog,
        generator: Option<Box<dyn ImageGenerator>>,
        notifier: Option<Box<dyn Notifier>>,
        recipient: Option<String>,
    ) -> Self {
        Self {
            store,
            catalog,
            generator,
            notifier,
            recipient,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub async fn execute(&self, today: NaiveDate) -> Result<RunOutcome> {
        let generator = self
            .generator
            .as_deref()
            .ok_or_else(|| AppError::ConfigMissing("GOOGLE_API_KEY".to_string()))?;
        let notifier = self
            .notifier
            .as_deref()
            .ok_or_else(|| AppError::ConfigMissing("GMAIL_USER / GMAIL_PASSWORD".to_string()))?;
        let recipient = self
            .recipient
            .as_deref()
            .ok_or_else(|| AppError::ConfigMissing("RECIPIENT_EMAIL or GMAIL_USER".to_string()))?;

        if !self.store.can_run_on(today) {
            return Ok(RunOutcome::AlreadyRan { date: today });
        }

        let total = self.catalog.len();
        let index = self.store.next_index(total)?;
        let prompt = self
            .catalog
            .prompt_for(index)
            .ok_or(AppError::EmptyCatalog)?;
        tracing::info!("Processing item {}/{}", index + 1, total);

        let image = generator.generate(&prompt).await?;
        if image.is_empty() {
            return Err(AppError::GenerationFailed("No image generated.".to_string()));
        }

        notifier
            .send(&image, recipient, &format!(" - {}", index + 1))
            .await?;

        self.store.write(index, today)?;
        tracing::info!("State updated: index {}, date {}", index, today);

        Ok(RunOutcome::Completed { index, date: today })
    }

    /// Run the job and log any failure. Never propagates: a failed run just
    /// leaves the cursor where it was for the next scheduled attempt.
    pub async fn run(&self, today: NaiveDate) -> Option<RunOutcome> {
        tracing::info!("Starting scheduled job for {}", today);

        match self.execute(today).await {
            Ok(RunOutcome::Completed { index, date }) => {
                tracing::info!("Run complete: item {} delivered for {}", index + 1, date);
                Some(RunOutcome::Completed { index, date })
            }
            Ok(RunOutcome::AlreadyRan { date }) => {
                tracing::info!("Already ran today ({}). Skipping.", date);
                Some(RunOutcome::AlreadyRan { date })
            }
            Err(e @ AppError::ConfigMissing(_)) => {
                tracing::error!("{}. Run aborted.", e);
                None
            }
            Err(e) => {
                tracing::error!("{}. Not updating state.", e);
                None
            }
        }
    }
}
