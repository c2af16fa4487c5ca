//! In-process transport straight into the relay service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::relay_protocol::RelayRequest;
use crate::application::services::RelayService;
use crate::domain::entities::Submission;
use crate::domain::ports::{RelayOutcome, RelayTransport, TransportError};

/// Delivers submissions to a [`RelayService`] running in the same process.
///
/// Used by the server-rendered contact page, which has no network hop.
#[derive(Clone)]
pub struct LocalRelayTransport {
    service: Arc<RelayService>,
}

impl LocalRelayTransport {
    pub fn new(service: Arc<RelayService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RelayTransport for LocalRelayTransport {
    async fn deliver(&self, submission: &Submission) -> Result<RelayOutcome, TransportError> {
        let report = self
            .service
            .relay(RelayRequest::from(submission).into())
            .await;

        Ok(RelayOutcome::Confirmed {
            success: report.success,
            message: report.message,
        })
    }
}
