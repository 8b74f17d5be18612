//! Domain types for interactive-page.
//!
//! Plain data shared by the validators, the form, the CLI report and
//! the TUI. No behavior beyond accessors and display strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// FIELDS
// ============================================================================

/// The four tracked signup fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Message written into the error slot when the field is empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required.",
            Field::Email => "Email is required.",
            Field::Password => "Password is required.",
            Field::ConfirmPassword => "Please confirm your password.",
        }
    }

    /// Message written into the error slot when the value is malformed.
    pub fn invalid_message(self) -> &'static str {
        match self {
            Field::Name => {
                "Please enter a valid name (letters and spaces only, at least 2 characters)."
            }
            Field::Email => "Please enter a valid email address.",
            Field::Password => {
                "Password must be at least 8 characters long, include uppercase, lowercase, and a number."
            }
            // Confirmation has no format of its own; it only fails by mismatch.
            Field::ConfirmPassword => "Passwords do not match.",
        }
    }

    /// Whether the input should be masked when rendered.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Next field in form order, wrapping around.
    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Password,
            Field::Password => Field::ConfirmPassword,
            Field::ConfirmPassword => Field::Name,
        }
    }

    /// Previous field in form order, wrapping around.
    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::ConfirmPassword,
            Field::Email => Field::Name,
            Field::Password => Field::Email,
            Field::ConfirmPassword => Field::Password,
        }
    }
}

// ============================================================================
// VALIDATION OUTCOMES
// ============================================================================

/// A single failed field predicate.
///
/// The `Display` output is the human-readable message rendered in the
/// field's error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .field.required_message())]
    EmptyField { field: Field },
    #[error("{}", .field.invalid_message())]
    InvalidFormat { field: Field },
    #[error("Passwords do not match.")]
    Mismatch,
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Live state of one input: what was typed and what its slot shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub raw_value: String,
    pub error: Option<ValidationError>,
}

impl FormField {
    /// True when the error slot is empty.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Text of the error slot; empty when the field passed.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Raw values of the four signup inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

/// Outcome of one field predicate, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub field: Field,
    /// None when the field passed.
    pub error: Option<ValidationError>,
}

/// Result of running every rule over a full set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Conjunction of every verdict.
    pub valid: bool,
    /// One verdict per field, in form order.
    pub fields: Vec<FieldVerdict>,
}

impl ValidationReport {
    pub fn from_verdicts(fields: Vec<FieldVerdict>) -> Self {
        let valid = fields.iter().all(|v| v.error.is_none());
        ValidationReport { valid, fields }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The verdict for a given field, if present.
    pub fn verdict(&self, field: Field) -> Option<&FieldVerdict> {
        self.fields.iter().find(|v| v.field == field)
    }
}

// ============================================================================
// PAGE TOGGLES
// ============================================================================

/// Color scheme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text of the toggle button: it names the mode a press switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Light => "Toggle Dark Mode",
            Theme::Dark => "Toggle Light Mode",
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
