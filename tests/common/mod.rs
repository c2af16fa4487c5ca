#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_contact::application::services::{OwnerProfile, RelayService};
use portfolio_contact::domain::ports::{MailError, Mailer, OutgoingEmail};
use portfolio_contact::state::AppState;
use std::sync::{Arc, Mutex};

pub const OWNER_EMAIL: &str = "owner@example.com";

/// Accepts every email and keeps a copy.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

/// Refuses every email, like an SMTP server with bad credentials.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Transport("535 authentication failed".to_string()))
    }

    async fn ping(&self) -> bool {
        false
    }
}

pub fn owner_profile() -> OwnerProfile {
    OwnerProfile {
        email: OWNER_EMAIL.to_string(),
        name: "Jane Doe".to_string(),
        title: "Full Stack Developer".to_string(),
        portfolio_url: Some("https://jane.dev".to_string()),
    }
}

pub fn create_test_state(mailer: Arc<dyn Mailer>) -> AppState {
    let service = RelayService::new(mailer, owner_profile());
    AppState::new(Arc::new(service), Some(OWNER_EMAIL.to_string()))
}

/// State backed by a [`RecordingMailer`] the test can inspect.
pub fn recording_state() -> (AppState, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    (create_test_state(mailer.clone()), mailer)
}
