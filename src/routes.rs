//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: mailer reachability (public)
//! - `/api/relay`         - Mail relay (public, CORS enabled)
//! - `/contact`           - Server-rendered contact form
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the relay and on form
//!   submissions (configurable for proxy deployments)
//! - **CORS** - Relay only, so a portfolio page on another origin can call it
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{MethodRouter, get};
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Router options taken from the configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// When `true`, rate limiting reads client IP from `X-Forwarded-For` /
    /// `X-Real-IP` headers instead of the peer socket address; enable only
    /// when the service runs behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Exact origin allowed to call the relay; `None` allows any origin.
    pub allowed_origin: Option<HeaderValue>,
    /// Directory served under `/static`.
    pub static_dir: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            behind_proxy: false,
            allowed_origin: None,
            static_dir: "static".to_string(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `options` - proxy, CORS and static file settings
pub fn app_router(state: AppState, options: RouterOptions) -> NormalizePath<Router> {
    let relay_router = with_rate_limit(api::routes::relay_routes(), options.behind_proxy)
        .layer(cors::layer(options.allowed_origin.as_ref()));

    let behind_proxy = options.behind_proxy;
    let contact_router =
        web::routes::contact_routes_with(|submit| with_method_rate_limit(submit, behind_proxy));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", relay_router)
        .merge(contact_router)
        .nest_service("/static", ServeDir::new(&options.static_dir))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn with_rate_limit(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(rate_limit::proxied_layer())
    } else {
        router.layer(rate_limit::layer())
    }
}

fn with_method_rate_limit(
    route: MethodRouter<AppState>,
    behind_proxy: bool,
) -> MethodRouter<AppState> {
    if behind_proxy {
        route.layer(rate_limit::proxied_layer())
    } else {
        route.layer(rate_limit::layer())
    }
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{OwnerProfile, RelayService};
    use crate::infrastructure::mail::LogMailer;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Method, Request, StatusCode, header};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let service = RelayService::new(
            Arc::new(LogMailer::new()),
            OwnerProfile {
                email: "owner@example.com".to_string(),
                name: "Jane Doe".to_string(),
                title: "Engineer".to_string(),
                portfolio_url: None,
            },
        );
        AppState::new(Arc::new(service), None)
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "https://jane.dev")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        request
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let app = app_router(test_state(), RouterOptions::default());

        let response = app.oneshot(request(Method::GET, "/api/relay/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_not_found() {
        let app = app_router(test_state(), RouterOptions::default());

        let response = app.oneshot(request(Method::GET, "/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_relay_allows_configured_origin() {
        let options = RouterOptions {
            allowed_origin: Some(HeaderValue::from_static("https://jane.dev")),
            ..RouterOptions::default()
        };
        let app = app_router(test_state(), options);

        let response = app.oneshot(request(Method::GET, "/api/relay")).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://jane.dev"
        );
    }

    fn form_post(body: &'static str) -> Request<Body> {
        let mut request = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        request
    }

    #[tokio::test]
    async fn test_contact_page_is_not_rate_limited() {
        let app = app_router(test_state(), RouterOptions::default());

        for _ in 0..8 {
            let response = app
                .clone()
                .oneshot(request(Method::GET, "/contact"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_contact_submissions_are_rate_limited() {
        let app = app_router(test_state(), RouterOptions::default());
        let body = "name=Jane&email=bad&subject=Hi&message=short";

        for _ in 0..5 {
            let response = app.clone().oneshot(form_post(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }

        let response = app.clone().oneshot(form_post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let response = app.oneshot(request(Method::GET, "/contact")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
