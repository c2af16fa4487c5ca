//! Form submission controller.
//!
//! Drives a [`ContactForm`] through `Idle → Validating → Submitting → Idle`
//! and issues exactly one relay call per valid submit.
//!
//! # Flow
//!
//! 1. Re-validate every required field; any failure returns to `Idle` with
//!    per-field errors and no banner
//! 2. Set the in-flight flag (the submit control is disabled while set)
//! 3. Deliver the submission through the [`RelayTransport`], once, no retry
//! 4. Clear the flag, return to `Idle` and show a success or failure banner

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::domain::form::ContactForm;
use crate::domain::ports::{RelayOutcome, RelayTransport};
use crate::domain::validation::FieldError;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you within 24 hours.";
pub const RECORDED_MESSAGE: &str = "Message received! I'll get back to you within 24 hours.";

/// How long a banner stays visible unless dismissed earlier.
const BANNER_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// Dismissible status message shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    shown_at: DateTime<Utc>,
    dismissed: bool,
}

impl Banner {
    pub fn new(kind: BannerKind, text: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at,
            dismissed: false,
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Banners hide themselves five seconds after being shown.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        !self.dismissed && now - self.shown_at < Duration::seconds(BANNER_TTL_SECS)
    }
}

/// Result of a single submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was sent.
    Invalid(Vec<FieldError>),
    /// A submission was already in flight; the event was ignored.
    Busy,
    /// The relay call settled and the user was told it succeeded.
    Sent(RelayOutcome),
    /// The relay call failed or the relay reported failure.
    Failed,
}

pub struct SubmissionController<T: RelayTransport> {
    transport: T,
    phase: Phase,
    in_flight: Arc<AtomicBool>,
    banner: Option<Banner>,
    fallback_contact: Option<String>,
}

impl<T: RelayTransport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            phase: Phase::Idle,
            in_flight: Arc::new(AtomicBool::new(false)),
            banner: None,
            fallback_contact: None,
        }
    }

    /// Address offered to the user when sending fails.
    pub fn with_fallback_contact(mut self, address: Option<String>) -> Self {
        self.fallback_contact = address;
        self
    }

    /// Uses a flag owned by the caller instead of a private one.
    pub fn sharing_in_flight(mut self, flag: Arc<AtomicBool>) -> Self {
        self.in_flight = flag;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Shared in-flight flag; UIs watch it to disable their submit control.
    pub fn in_flight(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.in_flight)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        if let Some(banner) = self.banner.as_mut() {
            banner.dismiss();
        }
    }

    /// Handles a submit event for `form`.
    ///
    /// On apparent success the form is reset; on failure its values are kept
    /// so the user can retry by hand.
    pub async fn submit(&mut self, form: &mut ContactForm) -> SubmitOutcome {
        if self.in_flight.load(Ordering::Acquire) {
            debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        self.transition(Phase::Validating);

        if !form.validate_all() {
            self.transition(Phase::Idle);
            return SubmitOutcome::Invalid(form.errors());
        }

        let submission = match form.submission(Utc::now()) {
            Ok(submission) => submission,
            Err(errors) => {
                self.transition(Phase::Idle);
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.in_flight.store(true, Ordering::Release);
        self.transition(Phase::Submitting);

        let result = self.transport.deliver(&submission).await;

        self.in_flight.store(false, Ordering::Release);
        self.transition(Phase::Idle);

        let outcome = match result {
            Ok(RelayOutcome::Confirmed {
                success: false,
                message,
            }) => {
                warn!(relay_message = %message, "Relay reported failure");
                SubmitOutcome::Failed
            }
            Ok(outcome) => {
                info!(outcome = ?outcome, "Contact form submitted");
                SubmitOutcome::Sent(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Contact form submission failed");
                SubmitOutcome::Failed
            }
        };

        let now = Utc::now();
        self.banner = Some(match &outcome {
            SubmitOutcome::Sent(RelayOutcome::Recorded) => {
                Banner::new(BannerKind::Success, RECORDED_MESSAGE, now)
            }
            SubmitOutcome::Sent(_) => Banner::new(BannerKind::Success, SENT_MESSAGE, now),
            _ => Banner::new(BannerKind::Error, self.failure_message(), now),
        });

        if matches!(outcome, SubmitOutcome::Sent(_)) {
            form.reset();
        }

        outcome
    }

    fn failure_message(&self) -> String {
        match &self.fallback_contact {
            Some(address) => format!(
                "Failed to send message. Please try again or contact me directly at {address}"
            ),
            None => "Failed to send message. Please try again later.".to_string(),
        }
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = ?self.phase, to = ?to, "Submission phase change");
        self.phase = to;
    }
}
