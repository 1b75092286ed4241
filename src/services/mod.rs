mod mailer;

pub use mailer::{Notifier, SmtpMailer};
