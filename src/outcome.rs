//! Shared operation result shape for application services.
//!
//! Every service operation returns `Result<OperationOutcome<T>, E>` where
//! `E` is the service's infrastructure error. Domain and validation failures
//! are data, not errors: they surface as [`OperationOutcome::Invalid`] so a
//! transport layer can render them without inspecting message text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending input field.
    pub field: String,
    /// Fixed, human-readable rule violation message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error from a field name and message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Discriminated result of a service operation.
///
/// Infrastructure faults (store or cache unavailable) are deliberately NOT
/// representable here; they propagate as the operation's `Err` variant with
/// their original diagnostics intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome<T> {
    /// The operation succeeded with a payload.
    Ok(T),
    /// Input or domain validation failed; all violated rules are listed.
    Invalid(Vec<FieldError>),
    /// The target entity does not exist.
    NotFound,
}

impl<T> OperationOutcome<T> {
    /// Builds an invalid outcome from a single field error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid(vec![FieldError::new(field, message)])
    }

    /// Returns the success payload, discarding failure details.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Invalid(_) | Self::NotFound => None,
        }
    }

    /// Returns `true` for a success outcome.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
