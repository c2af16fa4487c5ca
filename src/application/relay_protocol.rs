//! Wire shapes of the mail relay.
//!
//! The same shapes travel both ways: the terminal client and the HTTP relay
//! transport serialize [`RelayRequest`], the relay handlers deserialize it.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::application::services::{IncomingContact, RelayReport};
use crate::domain::entities::Submission;

/// Contact fields as sent to the relay, either as query parameters or as a
/// JSON body. Every field is optional; the relay defaults missing ones and
/// cuts overlong ones.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RelayRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    /// ISO-8601 time the form was submitted.
    #[serde(default)]
    #[validate(length(max = 64, message = "Timestamp is malformed"))]
    pub timestamp: Option<String>,
}

impl RelayRequest {
    /// Whether the request carries a submission, as opposed to a status probe.
    pub fn is_submission(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Present fields as query pairs, in form order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
            ("timestamp", &self.timestamp),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

impl From<&Submission> for RelayRequest {
    fn from(submission: &Submission) -> Self {
        Self {
            name: Some(submission.name().to_string()),
            email: Some(submission.email().to_string()),
            subject: Some(submission.subject().to_string()),
            message: Some(submission.message().to_string()),
            timestamp: Some(submission.timestamp_iso()),
        }
    }
}

impl From<RelayRequest> for IncomingContact {
    fn from(request: RelayRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            timestamp: request.timestamp,
        }
    }
}

/// Small status payload returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl From<RelayReport> for RelayResponse {
    fn from(report: RelayReport) -> Self {
        Self {
            success: report.success,
            message: report.message,
        }
    }
}
