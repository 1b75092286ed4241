use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::{AppError, Result};

const SUBJECT_PREFIX: &str = "Generated Image from Hand Painting";
const BODY_TEXT: &str = "Here is the image generated based on your hand painting prompt.";
const ATTACHMENT_NAME: &str = "generated_image.jpg";

/// Delivers a generated image to a recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, image: &[u8], recipient: &str, subject_suffix: &str) -> Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Build a mailer that talks to `host` over implicit TLS (port 465).
    pub fn new(host: &str, user: String, password: String, timeout: Duration) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| AppError::Config(format!("invalid SMTP host {}: {}", host, e)))?
            .credentials(Credentials::new(user.clone(), password))
            .timeout(Some(timeout))
            .build();

        Ok(Self {
            transport,
            from: user,
        })
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn send(&self, image: &[u8], recipient: &str, subject_suffix: &str) -> Result<()> {
        tracing::info!("Sending email to {}", recipient);

        let message = build_message(&self.from, recipient, subject_suffix, image)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::NotifyFailed(format!("SMTP error: {}", e)))?;

        tracing::info!("Email sent successfully");
        Ok(())
    }
}

fn build_message(from: &str, to: &str, subject_suffix: &str, image: &[u8]) -> Result<Message> {
    let from: Mailbox = from
        .parse()
        .map_err(|e| AppError::NotifyFailed(format!("invalid sender {}: {}", from, e)))?;
    let to: Mailbox = to
        .parse()
        .map_err(|e| AppError::NotifyFailed(format!("invalid recipient {}: {}", to, e)))?;
    let jpeg = ContentType::parse("image/jpeg")
        .map_err(|e| AppError::NotifyFailed(e.to_string()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(format!("{}{}", SUBJECT_PREFIX, subject_suffix))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(BODY_TEXT.to_string()))
                .singlepart(Attachment::new(ATTACHMENT_NAME.to_string()).body(image.to_vec(), jpeg)),
        )
        .map_err(|e| AppError::NotifyFailed(format!("failed to build message: {}", e)))
}
