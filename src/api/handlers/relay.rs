//! Handlers for the mail relay endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::debug;
use validator::Validate;

use crate::application::relay_protocol::{RelayRequest, RelayResponse};
use crate::error::AppError;
use crate::state::AppState;

const RUNNING_MESSAGE: &str = "Contact relay is running";

/// Relays a submission carried in query parameters.
///
/// # Endpoint
///
/// `GET /api/relay?name=..&email=..&subject=..&message=..&timestamp=..`
///
/// Without a `name` parameter the request is treated as a status probe and
/// answered with `{ "success": true, "message": "Contact relay is running" }`.
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Email sent successfully" }
/// ```
///
/// - **200 OK**: Both emails accepted (or nothing to send)
/// - **400 Bad Request**: The timestamp is malformed
/// - **502 Bad Gateway**: The mail server did not accept every email
pub async fn relay_get_handler(
    State(state): State<AppState>,
    Query(request): Query<RelayRequest>,
) -> Result<(StatusCode, Json<RelayResponse>), AppError> {
    if !request.is_submission() {
        return Ok((
            StatusCode::OK,
            Json(RelayResponse {
                success: true,
                message: RUNNING_MESSAGE.to_string(),
            }),
        ));
    }

    relay(&state, request).await
}

/// Relays a submission carried in a JSON body.
///
/// # Endpoint
///
/// `POST /api/relay`
///
/// The body is parsed as JSON whatever its declared content type. A missing
/// or unparseable body falls back to the query parameters. Missing fields are
/// replaced with placeholders, so this endpoint always attempts delivery.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "subject": "Hello",
///   "message": "This is a test message.",
///   "timestamp": "2024-05-01T10:00:00.000Z"
/// }
/// ```
///
/// Response codes as for [`relay_get_handler`].
pub async fn relay_post_handler(
    State(state): State<AppState>,
    Query(query): Query<RelayRequest>,
    body: Bytes,
) -> Result<(StatusCode, Json<RelayResponse>), AppError> {
    let request = if body.is_empty() {
        query
    } else {
        match serde_json::from_slice::<RelayRequest>(&body) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Body is not JSON, falling back to query parameters");
                query
            }
        }
    };

    relay(&state, request).await
}

async fn relay(
    state: &AppState,
    request: RelayRequest,
) -> Result<(StatusCode, Json<RelayResponse>), AppError> {
    request.validate()?;

    let report = state.relay_service.relay(request.into()).await;

    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    Ok((status, Json(report.into())))
}
