//! Repository port for user persistence and lookup.
//!
//! Users are keyed by their normalized email address. Absence is an absent
//! result for point lookups and `false` for deletes, never an error.

use crate::user::domain::{EmailAddress, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every stored user.
    async fn get_all(&self) -> UserRepositoryResult<Vec<User>>;

    /// Finds a user by email identity.
    ///
    /// Returns `None` when the user does not exist.
    async fn get_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Stores a new user and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Duplicate`] when the email identity is
    /// already present.
    async fn add(&self, user: &User) -> UserRepositoryResult<User>;

    /// Persists changes to an existing user and returns the updated record.
    ///
    /// Returns `None` when the user does not exist.
    async fn update(&self, user: &User) -> UserRepositoryResult<Option<User>>;

    /// Deletes a user by email identity.
    ///
    /// Returns `true` when a record was removed, `false` when the identity
    /// was absent.
    async fn delete_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<bool>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same email identity already exists.
    #[error("duplicate user email: {0}")]
    Duplicate(EmailAddress),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
