//! Application layer services implementing business logic.
//!
//! Services consume the port traits from [`crate::domain::ports`] and provide
//! a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::relay_service::RelayService`] - Formats and dispatches contact emails
//! - [`services::email_templates`] - askama templates for those emails
//!
//! [`relay_protocol`] holds the request and response shapes exchanged with the
//! relay endpoint.

pub mod relay_protocol;
pub mod services;
