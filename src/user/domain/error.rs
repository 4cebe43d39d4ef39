//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The display name is empty after trimming.
    #[error("user display name must not be empty")]
    EmptyDisplayName,

    /// The email address is empty after trimming.
    #[error("user email must not be empty")]
    EmptyEmail,

    /// The email address is structurally invalid.
    #[error("invalid user email address: {0}")]
    InvalidEmail(String),
}
