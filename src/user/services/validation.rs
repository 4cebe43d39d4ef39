//! Default user validator implementation.
//!
//! Applies the domain's field rules one by one, collecting errors so every
//! violated rule is reported at once.

use super::{CreateUserRequest, UpdateUserRequest};
use crate::outcome::FieldError;
use crate::user::domain::{EmailAddress, User};
use crate::user::ports::UserValidator;

/// Default implementation of the user validator port.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUserValidator;

impl DefaultUserValidator {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn validate_fields(name: &str, email: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(err) = User::validate_name(name) {
            errors.push(FieldError::new("name", err.to_string()));
        }
        if let Err(err) = EmailAddress::new(email) {
            errors.push(FieldError::new("email", err.to_string()));
        }
        errors
    }
}

impl UserValidator for DefaultUserValidator {
    fn validate_create(&self, request: &CreateUserRequest) -> Vec<FieldError> {
        Self::validate_fields(&request.name, &request.email)
    }

    fn validate_update(&self, request: &UpdateUserRequest) -> Vec<FieldError> {
        Self::validate_fields(&request.name, &request.email)
    }
}
