//! Relay transports for the contact form.
//!
//! - [`HttpRelayTransport`] - Remote relay over HTTP (`GET` or `POST` mode)
//! - [`LocalRelayTransport`] - Relay service in the same process
//! - [`SimulatedRelayTransport`] - Logs only, when no relay is configured

mod http_transport;
mod local_transport;
mod simulated_transport;

pub use http_transport::{HttpRelayTransport, RelayMode};
pub use local_transport::LocalRelayTransport;
pub use simulated_transport::SimulatedRelayTransport;
