//! Infrastructure layer for external integrations.
//!
//! This layer implements the port traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`mail`] - SMTP and logging mailers
//! - [`relay`] - Transports that carry submissions to the relay

pub mod mail;
pub mod relay;
