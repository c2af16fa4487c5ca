mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use portfolio_contact::api::handlers::health_handler;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _mailer) = common::recording_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["mailer"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = common::create_test_state(Arc::new(common::FailingMailer));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["mailer"]["status"], "error");
    assert_eq!(json["checks"]["mailer"]["message"], "Mail server unreachable");
}
