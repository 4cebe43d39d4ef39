//! In-memory repository for user service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{EmailAddress, User},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<HashMap<EmailAddress, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|users| users.len()).unwrap_or(0)
    }

    /// Returns `true` when no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> UserRepositoryResult<Vec<User>> {
        let users = self.state.read().map_err(poisoned)?;
        Ok(users.values().cloned().collect())
    }

    async fn get_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let users = self.state.read().map_err(poisoned)?;
        Ok(users.get(email).cloned())
    }

    async fn add(&self, user: &User) -> UserRepositoryResult<User> {
        let mut users = self.state.write().map_err(poisoned)?;
        if users.contains_key(user.email()) {
            return Err(UserRepositoryError::Duplicate(user.email().clone()));
        }
        users.insert(user.email().clone(), user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<Option<User>> {
        let mut users = self.state.write().map_err(poisoned)?;
        if !users.contains_key(user.email()) {
            return Ok(None);
        }
        users.insert(user.email().clone(), user.clone());
        Ok(Some(user.clone()))
    }

    async fn delete_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<bool> {
        let mut users = self.state.write().map_err(poisoned)?;
        Ok(users.remove(email).is_some())
    }
}
