//! Mail delivery for the relay.
//!
//! Provides two [`crate::domain::ports::Mailer`] implementations:
//! - [`SmtpMailer`] - Production SMTP delivery via lettre
//! - [`LogMailer`] - Logs emails when SMTP is not configured

mod log_mailer;
mod smtp_mailer;

pub use log_mailer::LogMailer;
pub use smtp_mailer::SmtpMailer;
