//! Contact form state: current field values plus per-field UI state.
//!
//! Mirrors the events a browser form produces:
//!
//! - **input** ([`ContactForm::set_value`]) stores the new value and clears
//!   any visible error without re-validating
//! - **blur** ([`ContactForm::blur`]) validates a single field
//! - **submit** ([`ContactForm::validate_all`]) re-validates every required field

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::entities::{FieldValues, Submission};
use crate::domain::validation::{FieldError, FieldName, Verdict, validate_field};

/// Visual status of a field container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

impl FieldStatus {
    /// CSS class applied to the field container.
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Neutral => "",
            FieldStatus::Success => "success",
            FieldStatus::Error => "error",
        }
    }
}

/// UI state of one field container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub status: FieldStatus,
    /// Message shown below the field; `None` when hidden.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FieldValues,
    states: HashMap<FieldName, FieldState>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form pre-filled with `values`, all fields in neutral state.
    pub fn with_values(values: FieldValues) -> Self {
        Self {
            values,
            states: HashMap::new(),
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn state(&self, field: FieldName) -> FieldState {
        self.states.get(&field).cloned().unwrap_or_default()
    }

    /// Input event: replaces the value and clears the error state.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.clear_field_error(field);
    }

    /// Blur event: validates one field and updates its state.
    pub fn blur(&mut self, field: FieldName) -> Verdict {
        let verdict = validate_field(field, self.values.get(field));

        let state = self.states.entry(field).or_default();
        match &verdict {
            Verdict::Valid => {
                state.status = FieldStatus::Success;
                state.error = None;
            }
            Verdict::Invalid(err) => {
                state.status = FieldStatus::Error;
                state.error = Some(err.message.clone());
            }
        }

        verdict
    }

    /// Validates every required field, returning whether all passed.
    ///
    /// Every field is checked even after a failure so each one shows its
    /// own error.
    pub fn validate_all(&mut self) -> bool {
        FieldName::ALL
            .into_iter()
            .map(|field| self.blur(field).is_valid())
            .fold(true, |all, ok| all && ok)
    }

    /// Fields currently marked as errored, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| {
                let state = self.states.get(&field)?;
                let message = state.error.clone()?;
                (state.status == FieldStatus::Error).then_some(FieldError { field, message })
            })
            .collect()
    }

    /// Returns every field container to the neutral state.
    pub fn clear_all_errors(&mut self) {
        self.states.clear();
    }

    /// Empties all values and clears all state.
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.clear_all_errors();
    }

    /// Builds a submission from the current values.
    ///
    /// # Errors
    ///
    /// Returns the failing fields if any value does not validate.
    pub fn submission(&self, now: DateTime<Utc>) -> Result<Submission, Vec<FieldError>> {
        Submission::new(&self.values, now)
    }

    fn clear_field_error(&mut self, field: FieldName) {
        if let Some(state) = self.states.get_mut(&field) {
            if state.status == FieldStatus::Error {
                state.status = FieldStatus::Neutral;
            }
            state.error = None;
        }
    }
}
