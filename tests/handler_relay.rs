mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use portfolio_contact::api::handlers::{relay_get_handler, relay_post_handler};
use portfolio_contact::state::AppState;
use serde_json::json;
use std::sync::Arc;

fn relay_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route(
            "/api/relay",
            get(relay_get_handler).post(relay_post_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_get_without_parameters_reports_running() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server.get("/api/relay").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "message": "Contact relay is running"
    }));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_get_with_parameters_sends_both_emails() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .get("/api/relay")
        .add_query_param("name", "Jane Doe")
        .add_query_param("email", "jane@example.com")
        .add_query_param("subject", "Hello")
        .add_query_param("message", "This is a test message.")
        .add_query_param("timestamp", "2024-05-01T10:00:00.000Z")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "message": "Email sent successfully"
    }));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, common::OWNER_EMAIL);
    assert_eq!(sent[0].subject, "Portfolio Contact: Hello");
    assert_eq!(sent[0].from_name, "Portfolio Contact Form");
    assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
    assert!(sent[0].html_body.contains("This is a test message."));
    assert!(sent[0].html_body.contains("2024-05-01 10:00:00 UTC"));

    assert_eq!(sent[1].to, "jane@example.com");
    assert_eq!(sent[1].subject, "Thank you for contacting me!");
    assert_eq!(sent[1].from_name, "Jane Doe - Full Stack Developer");
    assert!(sent[1].html_body.contains("https://jane.dev"));
}

#[tokio::test]
async fn test_post_json_body() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "This is a test message.",
            "timestamp": "2024-05-01T10:00:00.000Z"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_post_plain_text_body_is_parsed_as_json() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .text(r#"{"name":"Jane","email":"jane@example.com","subject":"Hi","message":"Hello there, friend"}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_post_invalid_body_falls_back_to_query() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .add_query_param("name", "Jane")
        .add_query_param("subject", "From the query")
        .text("not json")
        .await;

    response.assert_status_ok();

    let sent = mailer.sent();
    assert_eq!(sent[0].subject, "Portfolio Contact: From the query");
}

#[tokio::test]
async fn test_missing_fields_use_placeholders() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server.post("/api/relay").json(&json!({})).await;

    response.assert_status_ok();

    // No usable sender address: only the owner is notified
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Portfolio Contact: Portfolio Contact");
    assert_eq!(sent[0].reply_to, None);
    assert!(sent[0].html_body.contains("Unknown"));
    assert!(sent[0].html_body.contains("No email provided"));
    assert!(sent[0].html_body.contains("No message provided"));
}

#[tokio::test]
async fn test_submitted_html_is_escaped() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    server
        .post("/api/relay")
        .json(&json!({
            "name": "<script>alert(1)</script>",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "<b>bold</b> claims"
        }))
        .await
        .assert_status_ok();

    for email in mailer.sent() {
        assert!(!email.html_body.contains("<script>"));
        assert!(!email.html_body.contains("<b>bold</b>"));
    }
}

#[tokio::test]
async fn test_oversized_message_is_truncated_and_sent() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .json(&json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "x".repeat(5001)
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].html_body.contains(&"x".repeat(5000)));
    assert!(!sent[0].html_body.contains(&"x".repeat(5001)));
}

#[tokio::test]
async fn test_malformed_timestamp_is_rejected() {
    let (state, mailer) = common::recording_state();
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .json(&json!({
            "name": "Jane",
            "email": "jane@example.com",
            "timestamp": "9".repeat(65)
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["timestamp"][0], "Timestamp is malformed");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_mailer_failure_returns_bad_gateway() {
    let state = common::create_test_state(Arc::new(common::FailingMailer));
    let server = relay_server(state);

    let response = server
        .post("/api/relay")
        .json(&json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "This is a test message."
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({
        "success": false,
        "message": "Failed to send email"
    }));
}
