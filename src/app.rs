use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tokio::time::{self, MissedTickBehavior};

use crate::ai::{GeminiImageGenerator, ImageGenerator};
use crate::catalog::ContentCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::job::{Job, RunOutcome};
use crate::scheduler::Schedule;
use crate::services::{Notifier, SmtpMailer};
use crate::store::StateStore;

/// Long-running runner: polls the clock and fires the job once per day,
/// on the first poll at or after the trigger time.
pub struct App {
    job: Job,
    schedule: Schedule,
    run_on_startup: bool,
    last_fired: Option<NaiveDate>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let schedule = Schedule::parse(
            &config.run_at,
            Duration::from_secs(config.poll_interval_secs),
        )?;

        let catalog = match &config.catalog_path {
            Some(path) => ContentCatalog::from_file(Path::new(path))?,
            None => ContentCatalog::builtin(),
        };

        let timeout = Duration::from_secs(config.request_timeout_secs);

        let generator = match &config.google_api_key {
            Some(key) => {
                let generator =
                    GeminiImageGenerator::new(key.clone(), config.image_model.clone(), timeout)?;
                tracing::debug!("Image model: {}", generator.model());
                Some(Box::new(generator) as Box<dyn ImageGenerator>)
            }
            None => None,
        };

        let notifier = match (&config.gmail_user, &config.gmail_password) {
            (Some(user), Some(password)) => Some(Box::new(SmtpMailer::new(
                &config.smtp_host,
                user.clone(),
                password.clone(),
                timeout,
            )?) as Box<dyn Notifier>),
            _ => None,
        };

        let job = Job::new(
            StateStore::new(&config.state_path),
            catalog,
            generator,
            notifier,
            config.recipient().map(str::to_string),
        );

        Ok(Self::with_job(job, schedule, config.run_on_startup))
    }

    pub fn with_job(job: Job, schedule: Schedule, run_on_startup: bool) -> Self {
        Self {
            job,
            schedule,
            run_on_startup,
            last_fired: None,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Fire the job if the trigger time has passed and it has not fired
    /// yet for `now`'s date. A failed run is not retried the same day.
    pub async fn tick(&mut self, now: NaiveDateTime) -> Option<RunOutcome> {
        if !self.schedule.is_due(now) {
            return None;
        }

        let today = now.date();
        if self.last_fired == Some(today) {
            return None;
        }
        self.last_fired = Some(today);

        self.job.run(today).await
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("State file: {:?}", self.job.store().path());
        if !self.job.store().can_run_today() {
            tracing::info!("Today's item was already delivered");
        }

        if self.run_on_startup {
            self.job.run(Local::now().date_naive()).await;
        }

        let mut ticker = time::interval(self.schedule.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick(Local::now().naive_local()).await;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown requested, exiting");
                    return Ok(());
                }
            }
        }
    }
}
