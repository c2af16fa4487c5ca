//! Terminal client for the portfolio contact relay.
//!
//! Fills in the contact form from flags or interactive prompts, validates
//! every field the same way the web form does, and submits it once.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for every field
//! cargo run --bin contact -- submit
//!
//! # Non-interactive
//! cargo run --bin contact -- submit \
//!     --name "Jane Doe" --email jane@example.com \
//!     --subject Hello --message "This is a test message."
//!
//! # Fire-and-forget GET instead of a confirmed POST
//! cargo run --bin contact -- submit --mode get
//!
//! # Check that the relay answers
//! cargo run --bin contact -- ping
//! ```
//!
//! # Environment Variables
//!
//! - `RELAY_URL`: relay endpoint; without it submissions are only logged
//! - `RELAY_MODE`: `get` or `post` (default: `post`)
//! - `CONTACT_FALLBACK_EMAIL`: address shown when sending fails

use portfolio_contact::config::{ClientConfig, mask_connection_string};
use portfolio_contact::domain::controller::{BannerKind, SubmissionController, SubmitOutcome};
use portfolio_contact::domain::entities::Submission;
use portfolio_contact::domain::form::ContactForm;
use portfolio_contact::domain::ports::{RelayOutcome, RelayTransport, TransportError};
use portfolio_contact::domain::validation::{FieldName, validate_field};
use portfolio_contact::infrastructure::relay::{
    HttpRelayTransport, RelayMode, SimulatedRelayTransport,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Contact form client for the portfolio relay.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and send the contact form
    Submit {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Subject line
        #[arg(long)]
        subject: Option<String>,

        /// Message (at least 10 characters)
        #[arg(long)]
        message: Option<String>,

        /// Relay mode: get (fire-and-forget) or post (confirmed)
        #[arg(long)]
        mode: Option<RelayMode>,

        /// Relay endpoint, overrides RELAY_URL
        #[arg(long)]
        relay_url: Option<Url>,
    },

    /// Check that the relay is running
    Ping {
        /// Relay endpoint, overrides RELAY_URL
        #[arg(long)]
        relay_url: Option<Url>,
    },
}

/// Transport picked at runtime from the configuration.
enum ClientTransport {
    Http(HttpRelayTransport),
    Simulated(SimulatedRelayTransport),
}

#[async_trait]
impl RelayTransport for ClientTransport {
    async fn deliver(&self, submission: &Submission) -> Result<RelayOutcome, TransportError> {
        match self {
            ClientTransport::Http(transport) => transport.deliver(submission).await,
            ClientTransport::Simulated(transport) => transport.deliver(submission).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;

    match cli.command {
        Commands::Submit {
            name,
            email,
            subject,
            message,
            mode,
            relay_url,
        } => {
            let flags = [
                (FieldName::Name, name),
                (FieldName::Email, email),
                (FieldName::Subject, subject),
                (FieldName::Message, message),
            ];
            let mode = mode.unwrap_or(config.relay_mode);
            let relay_url = relay_url.or(config.relay_url);

            submit(flags, relay_url, mode, config.fallback_email).await
        }
        Commands::Ping { relay_url } => ping(relay_url.or(config.relay_url)).await,
    }
}

/// Collects the four fields and submits the form once.
///
/// # Flow
///
/// 1. Validate every value given as a flag; any failure exits with code 1
/// 2. Prompt for the missing fields, re-asking until each one is valid
/// 3. Submit through the configured relay (or log it when none is set)
/// 4. Print the resulting banner
async fn submit(
    flags: [(FieldName, Option<String>); 4],
    relay_url: Option<Url>,
    mode: RelayMode,
    fallback_email: Option<String>,
) -> Result<ExitCode> {
    println!("{}", "✉️  Contact Form".bright_blue().bold());
    println!();

    let mut form = ContactForm::new();
    let mut missing = Vec::new();
    let mut flag_errors = 0;

    for (field, value) in flags {
        match value {
            Some(value) => {
                form.set_value(field, value);
                if let Some(error) = form.blur(field).message() {
                    println!("  {} {}", "✗".red(), error.red());
                    flag_errors += 1;
                }
            }
            None => missing.push(field),
        }
    }

    if flag_errors > 0 {
        println!();
        println!("{}", "❌ Fix the fields above and try again".red());
        return Ok(ExitCode::FAILURE);
    }

    for field in missing {
        let value = prompt(field)?;
        form.set_value(field, value);
        form.blur(field);
    }

    let transport = match relay_url {
        Some(url) => {
            println!(
                "  Relay: {} ({})",
                mask_connection_string(url.as_str()).cyan(),
                mode.to_string().bright_black()
            );
            ClientTransport::Http(
                HttpRelayTransport::new(url, mode).context("Failed to build HTTP client")?,
            )
        }
        None => {
            println!(
                "{}",
                "⚠️  RELAY_URL not set, the message will only be logged".yellow()
            );
            ClientTransport::Simulated(SimulatedRelayTransport)
        }
    };
    println!();

    let mut controller =
        SubmissionController::new(transport).with_fallback_contact(fallback_email);

    let outcome = controller.submit(&mut form).await;

    if let SubmitOutcome::Invalid(errors) = &outcome {
        for error in errors {
            println!("  {} {}", "✗".red(), error.message.red());
        }
        return Ok(ExitCode::FAILURE);
    }

    if let Some(banner) = controller.banner() {
        match banner.kind {
            BannerKind::Success => println!("{}", format!("✅ {}", banner.text).green().bold()),
            BannerKind::Error => println!("{}", format!("❌ {}", banner.text).red().bold()),
        }
    }
    println!();

    Ok(match outcome {
        SubmitOutcome::Sent(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Prompts for one field, showing the field's error inline until it passes.
fn prompt(field: FieldName) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(field.label())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            validate_field(field, input)
                .into_result()
                .map_err(|e| e.message)
        })
        .interact_text()?;

    Ok(value)
}

/// Asks the relay for its status.
async fn ping(relay_url: Option<Url>) -> Result<ExitCode> {
    println!("{}", "📡 Relay Status".bright_blue().bold());
    println!();

    let url = relay_url.context("RELAY_URL must be set (or pass --relay-url)")?;
    println!("  Relay: {}", mask_connection_string(url.as_str()).cyan());

    let transport = HttpRelayTransport::new(url, RelayMode::Get)?;

    match transport.ping().await {
        Ok(response) if response.success => {
            println!("  Status: {}", "UP".green().bold());
            println!("  {}", response.message.bright_black());
            println!();
            Ok(ExitCode::SUCCESS)
        }
        Ok(response) => {
            println!("  Status: {}", "ERROR".red().bold());
            println!("  {}", response.message.bright_black());
            println!();
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            println!("  Status: {}", "DOWN".red().bold());
            println!("  {}", e.to_string().bright_black());
            println!();
            Ok(ExitCode::FAILURE)
        }
    }
}
