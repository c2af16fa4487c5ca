//! Field-level validation rules for the contact form.
//!
//! Every rule works on the trimmed value. Rules are checked in a fixed order
//! and the first failing one produces the message shown next to the field.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Compiled pattern for the email field.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Minimum message length, in characters, after trimming.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// The four required fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All required fields, in form order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    /// Name of the field on the wire and in HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "subject" => Ok(FieldName::Subject),
            "message" => Ok(FieldName::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A failed validation for a single field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(FieldError),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Error message, if the field failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(err) => Some(&err.message),
        }
    }

    pub fn into_result(self) -> Result<(), FieldError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(err) => Err(err),
        }
    }
}

/// Returns whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validates one field value.
///
/// # Rules
///
/// Applied to the trimmed value, first match wins:
///
/// 1. Empty: `"<Label> is required"`
/// 2. Email not matching the pattern: `"Please enter a valid email address"`
/// 3. Message shorter than 10 characters: `"Message must be at least 10 characters long"`
pub fn validate_field(field: FieldName, raw_value: &str) -> Verdict {
    let value = raw_value.trim();

    let message = if value.is_empty() {
        format!("{} is required", field.label())
    } else if field == FieldName::Email && !is_valid_email(value) {
        "Please enter a valid email address".to_string()
    } else if field == FieldName::Message && value.chars().count() < MESSAGE_MIN_CHARS {
        format!("Message must be at least {MESSAGE_MIN_CHARS} characters long")
    } else {
        return Verdict::Valid;
    };

    Verdict::Invalid(FieldError { field, message })
}
