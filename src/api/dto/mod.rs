//! Data Transfer Objects for API responses.
//!
//! The relay's request and response shapes live in
//! [`crate::application::relay_protocol`] because the relay transports
//! speak them too.

pub mod health;
