//! In-memory collaborators for job and runner tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ai::ImageGenerator;
use crate::error::{AppError, Result};
use crate::services::Notifier;

#[derive(Clone, Default)]
pub struct FakeGenerator {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
    pub empty: bool,
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(AppError::GenerationFailed("upstream down".to_string()));
        }
        if self.empty {
            return Ok(Vec::new());
        }
        Ok(vec![0xFF, 0xD8, 0xFF])
    }
}

/// Records `(image length, recipient, subject suffix)` per delivery.
#[derive(Clone, Default)]
pub struct FakeNotifier {
    pub sent: Arc<Mutex<Vec<(usize, String, String)>>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, image: &[u8], recipient: &str, subject_suffix: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::NotifyFailed(
                "SMTP error: connection refused".to_string(),
            ));
        }
        self.sent.lock().unwrap().push((
            image.len(),
            recipient.to_string(),
            subject_suffix.to_string(),
        ));
        Ok(())
    }
}
