//! User aggregate root.

use super::{EmailAddress, UserDomainError};
use serde::{Deserialize, Serialize};

/// User identified by their normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    email: EmailAddress,
    name: String,
}

impl User {
    /// Creates a user with a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyDisplayName`] when the name is empty
    /// after trimming.
    pub fn new(name: &str, email: EmailAddress) -> Result<Self, UserDomainError> {
        Ok(Self {
            email,
            name: Self::validate_name(name)?,
        })
    }

    /// Validates and normalizes a display name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyDisplayName`] when the value is empty
    /// after trimming.
    pub fn validate_name(raw: &str) -> Result<String, UserDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserDomainError::EmptyDisplayName);
        }
        Ok(trimmed.to_owned())
    }

    /// Returns the user's identity.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyDisplayName`] when the new name is
    /// empty after trimming.
    pub fn rename(&mut self, name: &str) -> Result<(), UserDomainError> {
        self.name = Self::validate_name(name)?;
        Ok(())
    }
}
