//! Mail-sending capability used by the relay.

use async_trait::async_trait;
use thiserror::Error;

/// A fully rendered HTML email ready to be handed to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub to_name: Option<String>,
    /// Display name of the sender; the address itself is the mailer's.
    pub from_name: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("mail server rejected message: {0}")]
    Rejected(String),

    #[error("mail transport error: {0}")]
    Transport(String),
}

/// Sends emails.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - SMTP via lettre
/// - [`crate::infrastructure::mail::LogMailer`] - logs instead of sending
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;

    /// Returns whether the mail server is reachable.
    async fn ping(&self) -> bool;
}
