//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RelayService;

#[derive(Clone)]
pub struct AppState {
    pub relay_service: Arc<RelayService>,
    /// Shown to visitors of the contact page when sending fails.
    pub fallback_contact: Option<String>,
}

impl AppState {
    pub fn new(relay_service: Arc<RelayService>, fallback_contact: Option<String>) -> Self {
        Self {
            relay_service,
            fallback_contact,
        }
    }
}
