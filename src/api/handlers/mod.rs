//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod relay;

pub use health::health_handler;
pub use relay::{relay_get_handler, relay_post_handler};
