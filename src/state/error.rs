//! State management-specific error types.

use super::FieldValidationError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Field name outside the add-employee form
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Whole-form validation failed
    #[error("Form has {} invalid field(s)", .errors.len())]
    InvalidForm { errors: Vec<FieldValidationError> },
}
