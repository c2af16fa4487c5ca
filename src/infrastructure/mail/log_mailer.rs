//! Mailer that logs instead of sending, for setups without SMTP.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{MailError, Mailer, OutgoingEmail};

/// A mailer that writes every email to the log and reports success.
///
/// # Use Cases
///
/// - Local development without an SMTP server
/// - Previewing the rendered emails
/// - Fallback when `SMTP_URL` is not configured
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        debug!("Using LogMailer (emails are logged, not sent)");
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        info!(
            to = %email.to,
            from_name = %email.from_name,
            reply_to = ?email.reply_to,
            subject = %email.subject,
            "Email not sent (LogMailer)"
        );
        debug!(body = %email.html_body, "Email body");
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}
