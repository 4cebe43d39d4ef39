//! User orchestration service.
//!
//! Coordinates input validation, entity mutation, repository persistence,
//! and cache maintenance with the same discipline as the task service:
//! reads are cache-aside, and every successful write invalidates the
//! affected keys strictly after the persistence call returns.

use super::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::cache::{CacheError, HybridCache, RemoteCache};
use crate::outcome::OperationOutcome;
use crate::user::domain::{EmailAddress, User};
use crate::user::ports::{UserRepository, UserRepositoryError, UserValidator};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Prefix for single-user cache keys.
const CACHE_KEY_PREFIX: &str = "user:";
/// Key under which the full user listing is cached.
const LISTING_CACHE_KEY: &str = "user:all";

fn entity_cache_key(email: &EmailAddress) -> String {
    format!("{CACHE_KEY_PREFIX}{email}")
}

/// Infrastructure errors surfaced by user service operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// User repository failure.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Cache tier failure.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<OperationOutcome<T>, UserServiceError>;

/// User orchestration service.
pub struct UserService<R, RC, C>
where
    R: UserRepository,
    RC: RemoteCache,
    C: Clock + Send + Sync,
{
    users: Arc<R>,
    cache: Arc<HybridCache<RC, C>>,
    validator: Arc<dyn UserValidator>,
}

impl<R, RC, C> UserService<R, RC, C>
where
    R: UserRepository,
    RC: RemoteCache,
    C: Clock + Send + Sync,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(
        users: Arc<R>,
        cache: Arc<HybridCache<RC, C>>,
        validator: Arc<dyn UserValidator>,
    ) -> Self {
        Self {
            users,
            cache,
            validator,
        }
    }

    /// Returns every user, served cache-aside under the listing key.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] on repository or cache failure.
    pub async fn get_all(&self) -> UserServiceResult<Vec<UserDto>> {
        let repository = Arc::clone(&self.users);
        let listing = self
            .cache
            .get_or_set(LISTING_CACHE_KEY, || async move {
                let users = repository.get_all().await.map_err(CacheError::source)?;
                Ok(Some(
                    users.iter().map(UserDto::from_entity).collect::<Vec<_>>(),
                ))
            })
            .await?;
        Ok(OperationOutcome::Ok(listing.unwrap_or_default()))
    }

    /// Returns the user with the given email, served cache-aside.
    ///
    /// A malformed email is a validation failure; a missing user is
    /// [`OperationOutcome::NotFound`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] on repository or cache failure.
    pub async fn get_by_email(&self, email: &str) -> UserServiceResult<UserDto> {
        let address = match EmailAddress::new(email) {
            Ok(address) => address,
            Err(err) => return Ok(OperationOutcome::invalid("email", err.to_string())),
        };

        let repository = Arc::clone(&self.users);
        let lookup = address.clone();
        let user = self
            .cache
            .get_or_set(&entity_cache_key(&address), || async move {
                repository
                    .get_by_email(&lookup)
                    .await
                    .map_err(CacheError::source)
            })
            .await?;
        Ok(user.map_or(OperationOutcome::NotFound, |found| {
            OperationOutcome::Ok(UserDto::from_entity(&found))
        }))
    }

    /// Validates and persists a new user, then invalidates the listing key.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] on repository or cache failure; input
    /// violations come back as [`OperationOutcome::Invalid`] without any
    /// repository call.
    pub async fn create(&self, request: &CreateUserRequest) -> UserServiceResult<UserDto> {
        let violations = self.validator.validate_create(request);
        if !violations.is_empty() {
            return Ok(OperationOutcome::Invalid(violations));
        }

        let user = match EmailAddress::new(&request.email)
            .and_then(|address| User::new(&request.name, address))
        {
            Ok(user) => user,
            Err(err) => return Ok(OperationOutcome::invalid("user", err.to_string())),
        };

        let created = self.users.add(&user).await?;
        self.cache.remove(LISTING_CACHE_KEY).await?;
        debug!(email = %created.email(), "user created");
        Ok(OperationOutcome::Ok(UserDto::from_entity(&created)))
    }

    /// Renames an existing user, persists, and invalidates both cache keys.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] on repository or cache failure. A missing
    /// user is [`OperationOutcome::NotFound`]; input violations are
    /// [`OperationOutcome::Invalid`].
    pub async fn update(&self, request: &UpdateUserRequest) -> UserServiceResult<UserDto> {
        let violations = self.validator.validate_update(request);
        if !violations.is_empty() {
            return Ok(OperationOutcome::Invalid(violations));
        }

        let address = match EmailAddress::new(&request.email) {
            Ok(address) => address,
            Err(err) => return Ok(OperationOutcome::invalid("email", err.to_string())),
        };

        let Some(mut user) = self.users.get_by_email(&address).await? else {
            return Ok(OperationOutcome::NotFound);
        };
        if let Err(err) = user.rename(&request.name) {
            return Ok(OperationOutcome::invalid("name", err.to_string()));
        }

        let Some(updated) = self.users.update(&user).await? else {
            return Ok(OperationOutcome::NotFound);
        };

        self.invalidate_entity(&address).await?;
        debug!(email = %address, "user updated");
        Ok(OperationOutcome::Ok(UserDto::from_entity(&updated)))
    }

    /// Deletes the user with the given email, then invalidates both cache
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] on repository or cache failure; an absent
    /// target is reported as [`OperationOutcome::NotFound`].
    pub async fn delete(&self, email: &str) -> UserServiceResult<()> {
        let address = match EmailAddress::new(email) {
            Ok(address) => address,
            Err(err) => return Ok(OperationOutcome::invalid("email", err.to_string())),
        };

        if !self.users.delete_by_email(&address).await? {
            return Ok(OperationOutcome::NotFound);
        }
        self.invalidate_entity(&address).await?;
        debug!(email = %address, "user deleted");
        Ok(OperationOutcome::Ok(()))
    }

    /// Evicts the user's own key and the listing key from both tiers.
    async fn invalidate_entity(&self, email: &EmailAddress) -> Result<(), CacheError> {
        self.cache.remove(&entity_cache_key(email)).await?;
        self.cache.remove(LISTING_CACHE_KEY).await
    }
}
