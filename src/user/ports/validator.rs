//! Validator port for user input validation.

use crate::outcome::FieldError;
use crate::user::services::{CreateUserRequest, UpdateUserRequest};

/// Port for user validation.
///
/// Implementations collect every violated rule before returning rather than
/// failing on the first. An empty list means valid.
pub trait UserValidator: Send + Sync {
    /// Validates a creation request.
    fn validate_create(&self, request: &CreateUserRequest) -> Vec<FieldError>;

    /// Validates an update request.
    fn validate_update(&self, request: &UpdateUserRequest) -> Vec<FieldError>;
}
