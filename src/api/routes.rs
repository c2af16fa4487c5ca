//! API route configuration.
//!
//! The relay is public: anyone who can load the portfolio page can submit
//! the contact form. Abuse is bounded by rate limiting in [`crate::routes`].

use crate::api::handlers::{relay_get_handler, relay_post_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Relay routes.
///
/// # Endpoints
///
/// - `GET  /relay` - Submission as query parameters, or status probe
/// - `POST /relay` - Submission as JSON body, query parameters as fallback
pub fn relay_routes() -> Router<AppState> {
    Router::new().route("/relay", get(relay_get_handler).post(relay_post_handler))
}
