//! Domain layer: the contact form and its submission rules.
//!
//! This module holds the parts of the system that do not depend on HTTP,
//! SMTP or any particular front end.
//!
//! # Architecture
//!
//! - [`validation`] - Field rules and error messages
//! - [`entities`] - The [`entities::Submission`] value object
//! - [`form`] - Field values plus per-field UI state
//! - [`controller`] - `Idle → Validating → Submitting → Idle` state machine
//! - [`ports`] - Traits for the relay transport and the mailer
//!
//! # Submission Flow
//!
//! 1. Front end feeds input/blur events into a [`form::ContactForm`]
//! 2. On submit, [`controller::SubmissionController`] re-validates every field
//! 3. A valid form becomes a [`entities::Submission`] and is delivered once
//!    through a [`ports::RelayTransport`]
//! 4. The relay renders two emails and hands them to a [`ports::Mailer`]

pub mod controller;
pub mod entities;
pub mod form;
pub mod ports;
pub mod validation;
