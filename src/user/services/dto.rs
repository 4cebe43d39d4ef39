//! Data transfer shapes crossing the user service boundary.

use crate::user::domain::User;
use serde::{Deserialize, Serialize};

/// External representation of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// Normalized email identity.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl UserDto {
    /// Maps a user entity to its external representation.
    #[must_use]
    pub fn from_entity(user: &User) -> Self {
        Self {
            email: user.email().as_str().to_owned(),
            name: user.name().to_owned(),
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Email address; becomes the user's identity after normalization.
    pub email: String,
}

/// Input for renaming an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// Email identity of the user to update.
    pub email: String,
    /// New display name.
    pub name: String,
}
