//! HTTP server initialization and runtime setup.
//!
//! Handles logging, mailer selection and the Axum server lifecycle.

use crate::application::services::RelayService;
use crate::config::Config;
use crate::domain::ports::Mailer;
use crate::infrastructure::mail::{LogMailer, SmtpMailer};
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`; `log_format` selects
/// human-readable `text` or one JSON object per line.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().with_current_span(false).init();
    } else {
        builder.init();
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SMTP mailer (or LogMailer fallback)
/// - Relay service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The SMTP URL or sender address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mailer: Arc<dyn Mailer> = match (&config.smtp_url, &config.mail_from) {
        (Some(smtp_url), Some(from)) => {
            let mailer = SmtpMailer::new(smtp_url, from).context("Failed to configure SMTP")?;
            if !mailer.ping().await {
                tracing::warn!("SMTP server not reachable yet, relay requests may fail");
            }
            Arc::new(mailer)
        }
        _ => {
            tracing::warn!("SMTP_URL not set, emails will only be logged");
            Arc::new(LogMailer::new())
        }
    };

    let relay_service = Arc::new(RelayService::new(mailer, config.owner_profile()));
    let state = AppState::new(relay_service, Some(config.owner_email.clone()));

    let allowed_origin = config
        .allowed_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()
        .context("ALLOWED_ORIGIN is not a valid header value")?;

    let app = app_router(
        state,
        RouterOptions {
            behind_proxy: config.behind_proxy,
            allowed_origin,
            static_dir: config.static_dir.clone(),
        },
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
