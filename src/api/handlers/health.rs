//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::api::dto::health::{
    ComponentCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Mailer reachable
/// - **503 Service Unavailable**: Mailer unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mailer": { "status": "ok", "message": "Mail server reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let mailer = check_mailer(&state).await;

    let (status, code) = if mailer.is_ok() {
        (ServiceStatus::Healthy, StatusCode::OK)
    } else {
        (ServiceStatus::Degraded, StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { mailer },
    };

    (code, Json(response))
}

async fn check_mailer(state: &AppState) -> ComponentCheck {
    if state.relay_service.mailer_healthy().await {
        ComponentCheck {
            status: ComponentStatus::Ok,
            message: Some("Mail server reachable"),
        }
    } else {
        warn!("Health check: mail server unreachable");
        ComponentCheck {
            status: ComponentStatus::Error,
            message: Some("Mail server unreachable"),
        }
    }
}
