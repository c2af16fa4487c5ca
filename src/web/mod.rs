//! Web layer for browser-based UI.
//!
//! Serves the contact page as server-rendered HTML using Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
