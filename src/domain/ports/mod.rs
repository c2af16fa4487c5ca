//! Port traits implemented by the infrastructure layer.
//!
//! - [`RelayTransport`] - Delivers a submission to the relay endpoint
//! - [`Mailer`] - Sends rendered emails
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod mailer;
pub mod relay_transport;

pub use mailer::{MailError, Mailer, OutgoingEmail};
pub use relay_transport::{RelayOutcome, RelayTransport, TransportError};

#[cfg(test)]
pub use mailer::MockMailer;
#[cfg(test)]
pub use relay_transport::MockRelayTransport;
