//! Core domain entities.
//!
//! - [`Submission`] - A validated contact form submission
//! - [`FieldValues`] - Raw, unvalidated form input
//!
//! Entities are plain data structures; a [`Submission`] can only be built from
//! values that satisfy every field rule.

pub mod submission;

pub use submission::{FieldValues, Submission};
