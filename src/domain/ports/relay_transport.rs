//! Outbound channel from the contact form to the relay endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Submission;

/// What the form learned about a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Request was sent but its response cannot be read; success is assumed.
    Dispatched,
    /// No relay is configured; the submission was only logged.
    Recorded,
    /// The relay answered with its own verdict.
    Confirmed { success: bool, message: String },
}

/// Transport-level failure talking to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or its body could not be received.
    #[error("relay request failed: {0}")]
    Http(String),

    #[error("relay returned an unreadable response (status {status})")]
    UnreadableResponse { status: u16 },
}

/// Delivers a submission to the relay endpoint.
///
/// Implementations issue at most one request per call and never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::relay::HttpRelayTransport`] - remote relay over HTTP
/// - [`crate::infrastructure::relay::LocalRelayTransport`] - in-process relay service
/// - [`crate::infrastructure::relay::SimulatedRelayTransport`] - log only
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn deliver(&self, submission: &Submission) -> Result<RelayOutcome, TransportError>;
}
