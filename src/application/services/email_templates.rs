//! HTML email templates rendered by the relay.
//!
//! Templates live in `templates/email/` and are compiled by askama; every
//! interpolated value is HTML-escaped.

use askama::Template;
use chrono::{DateTime, Utc};

/// Notification sent to the site owner.
#[derive(Template)]
#[template(path = "email/owner_notification.html")]
pub struct OwnerNotification<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub timestamp: &'a str,
}

/// Acknowledgement sent back to whoever filled in the form.
#[derive(Template)]
#[template(path = "email/acknowledgement.html")]
pub struct Acknowledgement<'a> {
    pub name: &'a str,
    pub owner_name: &'a str,
    pub owner_title: &'a str,
    pub portfolio_url: Option<&'a str>,
}

/// Formats an ISO-8601 timestamp for display, keeping the raw text when it
/// does not parse.
pub fn display_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| {
            ts.with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}
