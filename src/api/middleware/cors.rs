//! CORS policy for the relay endpoint.
//!
//! The portfolio page is usually served from a different origin than the
//! relay, so browsers need these headers to read relay responses.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer.
///
/// # Arguments
///
/// - `allowed_origin` - exact origin allowed to call the relay
///   (e.g. `https://jane.example.com`); `None` allows any origin
///
/// Only `GET`, `POST` and `OPTIONS` with a `Content-Type` header are allowed.
pub fn layer(allowed_origin: Option<&HeaderValue>) -> CorsLayer {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
