//! Web page handlers.

pub mod contact;

pub use contact::{contact_page_handler, contact_submit_handler};
