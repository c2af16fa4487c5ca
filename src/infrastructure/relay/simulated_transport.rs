//! Transport used when no relay endpoint is configured.

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::Submission;
use crate::domain::ports::{RelayOutcome, RelayTransport, TransportError};

/// Logs the submission instead of sending it anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedRelayTransport;

#[async_trait]
impl RelayTransport for SimulatedRelayTransport {
    async fn deliver(&self, submission: &Submission) -> Result<RelayOutcome, TransportError> {
        info!(
            name = %submission.name(),
            email = %submission.email(),
            subject = %submission.subject(),
            message = %submission.message(),
            timestamp = %submission.timestamp_iso(),
            "Contact form submission recorded (no relay configured, set RELAY_URL to send it)"
        );
        Ok(RelayOutcome::Recorded)
    }
}
