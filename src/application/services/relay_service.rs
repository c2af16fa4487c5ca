//! Mail relay service: turns a contact submission into two emails.

use askama::Template;
use chrono::{SecondsFormat, Utc};
use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::services::email_templates::{
    Acknowledgement, OwnerNotification, display_timestamp,
};
use crate::domain::ports::{MailError, Mailer, OutgoingEmail};
use crate::domain::validation::is_valid_email;

pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_EMAIL: &str = "No email provided";
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";
pub const DEFAULT_MESSAGE: &str = "No message provided";

/// Per-field limits, in characters. Longer values are cut, never refused.
pub const MAX_NAME_CHARS: usize = 256;
pub const MAX_EMAIL_CHARS: usize = 320;
pub const MAX_SUBJECT_CHARS: usize = 256;
pub const MAX_MESSAGE_CHARS: usize = 5000;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully";
pub const FAILURE_MESSAGE: &str = "Failed to send email";

const NOTIFICATION_SENDER_NAME: &str = "Portfolio Contact Form";
const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for contacting me!";

/// Site owner details used to address and sign the emails.
#[derive(Debug, Clone)]
pub struct OwnerProfile {
    pub email: String,
    pub name: String,
    pub title: String,
    pub portfolio_url: Option<String>,
}

/// Contact fields as received by the relay; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

/// Contact fields after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl IncomingContact {
    /// Replaces each missing or blank field with its placeholder and cuts
    /// overlong fields down to their limit.
    ///
    /// A missing timestamp becomes the current time.
    pub fn normalize(self) -> NormalizedContact {
        fn field(value: Option<String>, default: &str, max_chars: usize) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| truncate_chars(v, max_chars))
                .unwrap_or_else(|| default.to_string())
        }

        let timestamp = self
            .timestamp
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

        NormalizedContact {
            name: field(self.name, DEFAULT_NAME, MAX_NAME_CHARS),
            email: field(self.email, DEFAULT_EMAIL, MAX_EMAIL_CHARS),
            subject: field(self.subject, DEFAULT_SUBJECT, MAX_SUBJECT_CHARS),
            message: field(self.message, DEFAULT_MESSAGE, MAX_MESSAGE_CHARS),
            timestamp,
        }
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((cut, _)) = value.char_indices().nth(max_chars) {
        warn!(limit = max_chars, "Contact field truncated");
        value.truncate(cut);
    }
    value
}

/// Relay verdict returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReport {
    pub success: bool,
    pub message: String,
}

impl RelayReport {
    fn sent() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failed() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Formats and dispatches contact emails.
///
/// For every submission two messages are attempted, best effort:
///
/// 1. A notification to the site owner carrying every field, with `Reply-To`
///    set to the sender when their address is usable
/// 2. An acknowledgement to the sender, skipped when the sender address is
///    not a valid email or the mailer cannot parse it
///
/// The report is successful only if every attempted message was accepted.
/// Failure details are logged, never returned.
pub struct RelayService {
    mailer: Arc<dyn Mailer>,
    owner: OwnerProfile,
}

impl RelayService {
    pub fn new(mailer: Arc<dyn Mailer>, owner: OwnerProfile) -> Self {
        Self { mailer, owner }
    }

    pub fn owner(&self) -> &OwnerProfile {
        &self.owner
    }

    /// Relays one contact submission.
    #[tracing::instrument(name = "Relay contact submission", skip(self, incoming))]
    pub async fn relay(&self, incoming: IncomingContact) -> RelayReport {
        counter!("contact_submissions_total").increment(1);

        let contact = incoming.normalize();
        let sender_valid = is_valid_email(&contact.email);

        let mut success = match self.owner_notification(&contact, sender_valid) {
            Ok(email) => self.dispatch("owner", email).await.is_ok(),
            Err(e) => {
                warn!(error = %e, "Failed to render owner notification");
                false
            }
        };

        if sender_valid {
            success &= match self.acknowledgement(&contact) {
                Ok(email) => match self.dispatch("acknowledgement", email).await {
                    Ok(()) => true,
                    // Address passed the form check but not the mailer's parser.
                    Err(MailError::InvalidAddress { .. }) => {
                        warn!(email = %contact.email, "Sender address rejected by mailer, acknowledgement skipped");
                        true
                    }
                    Err(_) => false,
                },
                Err(e) => {
                    warn!(error = %e, "Failed to render acknowledgement");
                    false
                }
            };
        } else {
            warn!(email = %contact.email, "Sender address unusable, acknowledgement skipped");
        }

        if success {
            info!(subject = %contact.subject, "Contact emails dispatched");
            RelayReport::sent()
        } else {
            RelayReport::failed()
        }
    }

    /// Returns whether the underlying mailer is reachable.
    pub async fn mailer_healthy(&self) -> bool {
        self.mailer.ping().await
    }

    fn owner_notification(
        &self,
        contact: &NormalizedContact,
        sender_valid: bool,
    ) -> Result<OutgoingEmail, askama::Error> {
        let timestamp = display_timestamp(&contact.timestamp);
        let html_body = OwnerNotification {
            name: &contact.name,
            email: &contact.email,
            subject: &contact.subject,
            message: &contact.message,
            timestamp: &timestamp,
        }
        .render()?;

        Ok(OutgoingEmail {
            to: self.owner.email.clone(),
            to_name: Some(self.owner.name.clone()),
            from_name: NOTIFICATION_SENDER_NAME.to_string(),
            reply_to: sender_valid.then(|| contact.email.clone()),
            subject: format!("Portfolio Contact: {}", contact.subject),
            html_body,
        })
    }

    fn acknowledgement(&self, contact: &NormalizedContact) -> Result<OutgoingEmail, askama::Error> {
        let html_body = Acknowledgement {
            name: &contact.name,
            owner_name: &self.owner.name,
            owner_title: &self.owner.title,
            portfolio_url: self.owner.portfolio_url.as_deref(),
        }
        .render()?;

        Ok(OutgoingEmail {
            to: contact.email.clone(),
            to_name: Some(contact.name.clone()),
            from_name: format!("{} - {}", self.owner.name, self.owner.title),
            reply_to: None,
            subject: ACKNOWLEDGEMENT_SUBJECT.to_string(),
            html_body,
        })
    }

    async fn dispatch(&self, kind: &'static str, email: OutgoingEmail) -> Result<(), MailError> {
        match self.mailer.send(email).await {
            Ok(()) => {
                counter!("contact_emails_total", "kind" => kind, "outcome" => "sent").increment(1);
                Ok(())
            }
            Err(e) => {
                counter!("contact_emails_total", "kind" => kind, "outcome" => "failed")
                    .increment(1);
                warn!(kind, error = %e, "Failed to send email");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockMailer;
    use mockall::Sequence;

    fn owner() -> OwnerProfile {
        OwnerProfile {
            email: "owner@example.com".to_string(),
            name: "Alex Example".to_string(),
            title: "Full Stack Developer".to_string(),
            portfolio_url: Some("https://alex.example.com".to_string()),
        }
    }

    fn jane() -> IncomingContact {
        IncomingContact {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            subject: Some("Hello".to_string()),
            message: Some("This is a test message.".to_string()),
            timestamp: Some("2024-05-01T10:00:00.000Z".to_string()),
        }
    }

    #[test]
    fn test_normalize_applies_placeholders() {
        let contact = IncomingContact {
            name: None,
            email: Some("   ".to_string()),
            subject: Some(String::new()),
            message: None,
            timestamp: None,
        }
        .normalize();

        assert_eq!(contact.name, DEFAULT_NAME);
        assert_eq!(contact.email, DEFAULT_EMAIL);
        assert_eq!(contact.subject, DEFAULT_SUBJECT);
        assert_eq!(contact.message, DEFAULT_MESSAGE);
        assert!(chrono::DateTime::parse_from_rfc3339(&contact.timestamp).is_ok());
    }

    #[test]
    fn test_normalize_keeps_present_fields() {
        let contact = jane().normalize();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.timestamp, "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn test_normalize_truncates_overlong_fields() {
        let contact = IncomingContact {
            name: Some("é".repeat(300)),
            message: Some("x".repeat(MAX_MESSAGE_CHARS + 1)),
            ..jane()
        }
        .normalize();

        assert_eq!(contact.name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(contact.message.len(), MAX_MESSAGE_CHARS);
        assert_eq!(contact.subject, "Hello");
    }

    #[tokio::test]
    async fn test_relay_sends_notification_then_acknowledgement() {
        let mut mailer = MockMailer::new();
        let mut seq = Sequence::new();

        mailer
            .expect_send()
            .withf(|email| {
                email.to == "owner@example.com"
                    && email.subject == "Portfolio Contact: Hello"
                    && email.from_name == "Portfolio Contact Form"
                    && email.reply_to.as_deref() == Some("jane@example.com")
                    && email.html_body.contains("This is a test message.")
                    && email.html_body.contains("2024-05-01 10:00:00 UTC")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        mailer
            .expect_send()
            .withf(|email| {
                email.to == "jane@example.com"
                    && email.subject == "Thank you for contacting me!"
                    && email.from_name == "Alex Example - Full Stack Developer"
                    && email.html_body.contains("Hi Jane Doe,")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = RelayService::new(Arc::new(mailer), owner());
        let report = service.relay(jane()).await;

        assert_eq!(
            report,
            RelayReport {
                success: true,
                message: "Email sent successfully".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_relay_skips_acknowledgement_for_placeholder_email() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com" && email.reply_to.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let service = RelayService::new(Arc::new(mailer), owner());
        let report = service
            .relay(IncomingContact {
                name: Some("Jane".to_string()),
                ..Default::default()
            })
            .await;

        assert!(report.success);
    }

    #[tokio::test]
    async fn test_relay_succeeds_when_mailer_cannot_parse_sender() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com")
            .times(1)
            .returning(|_| Ok(()));
        mailer
            .expect_send()
            .withf(|email| email.to == "jane,doe@example.com")
            .times(1)
            .returning(|email| {
                Err(MailError::InvalidAddress {
                    address: email.to,
                    reason: "invalid character".to_string(),
                })
            });

        let service = RelayService::new(Arc::new(mailer), owner());
        let report = service
            .relay(IncomingContact {
                email: Some("jane,doe@example.com".to_string()),
                ..jane()
            })
            .await;

        assert!(report.success);
    }

    #[tokio::test]
    async fn test_relay_attempts_both_emails_when_first_fails() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com")
            .times(1)
            .returning(|_| Err(MailError::Transport("connection reset".to_string())));
        mailer
            .expect_send()
            .withf(|email| email.to == "jane@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = RelayService::new(Arc::new(mailer), owner());
        let report = service.relay(jane()).await;

        assert_eq!(
            report,
            RelayReport {
                success: false,
                message: "Failed to send email".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_relay_reports_acknowledgement_failure() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com")
            .returning(|_| Ok(()));
        mailer
            .expect_send()
            .withf(|email| email.to == "jane@example.com")
            .returning(|_| Err(MailError::Rejected("550 mailbox unavailable".to_string())));

        let service = RelayService::new(Arc::new(mailer), owner());
        let report = service.relay(jane()).await;

        assert!(!report.success);
        assert!(!report.message.contains("550"));
    }

    #[tokio::test]
    async fn test_mailer_health_is_forwarded() {
        let mut mailer = MockMailer::new();
        mailer.expect_ping().times(1).returning(|| false);

        let service = RelayService::new(Arc::new(mailer), owner());
        assert!(!service.mailer_healthy().await);
    }
}
