//! DTOs for health check endpoint.

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The relay depends on the mail server only.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub mailer: ComponentCheck,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub message: Option<&'static str>,
}

impl ComponentCheck {
    pub fn is_ok(&self) -> bool {
        self.status == ComponentStatus::Ok
    }
}
