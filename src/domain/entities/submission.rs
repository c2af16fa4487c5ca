//! Submission entity: the value sent from the contact form to the relay.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::validation::{FieldError, FieldName, validate_field};

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// Validates every field and collects all failures.
    pub fn errors(&self) -> Vec<FieldError> {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, self.get(field)).into_result().err())
            .collect()
    }
}

/// A validated contact form submission.
///
/// Can only be built from values that pass every field rule; values are
/// stored trimmed. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl Submission {
    /// Builds a submission stamped with `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns every field that fails validation.
    pub fn new(values: &FieldValues, timestamp: DateTime<Utc>) -> Result<Self, Vec<FieldError>> {
        let errors = values.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            subject: values.subject.trim().to_string(),
            message: values.message.trim().to_string(),
            timestamp,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp in ISO-8601 with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
