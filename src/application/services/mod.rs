//! Business logic services for the application layer.

pub mod email_templates;
pub mod relay_service;

pub use relay_service::{IncomingContact, OwnerProfile, RelayReport, RelayService};
