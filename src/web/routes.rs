//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{contact_page_handler, contact_submit_handler};
use axum::Router;
use axum::routing::{MethodRouter, get, post};

/// Contact page routes.
///
/// # Endpoints
///
/// - `GET  /contact` - Empty contact form
/// - `POST /contact` - Validate and relay a posted form
pub fn contact_routes() -> Router<AppState> {
    contact_routes_with(|submit| submit)
}

/// Contact page routes with `wrap` applied to `POST /contact` only.
///
/// Rendering the empty form is never wrapped.
pub fn contact_routes_with(
    wrap: impl FnOnce(MethodRouter<AppState>) -> MethodRouter<AppState>,
) -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(contact_page_handler).merge(wrap(post(contact_submit_handler))),
    )
}
