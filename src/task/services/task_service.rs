//! Task orchestration service.
//!
//! Coordinates input validation, entity mutation through the lifecycle state
//! machine, repository persistence, and cache maintenance. Reads traverse
//! the hybrid cache; every successful write invalidates the affected cache
//! keys strictly after the persistence call returns, so readers never
//! observe a stale value once a write has completed.

use super::validation::field_for;
use super::{CreateTaskRequest, TaskDto, UpdateTaskRequest};
use crate::cache::{CacheError, HybridCache, RemoteCache};
use crate::outcome::{FieldError, OperationOutcome};
use crate::task::domain::{Task, TaskId};
use crate::task::ports::{TaskRepository, TaskValidator};
use crate::user::domain::EmailAddress;
use crate::user::ports::{UserRepository, UserRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Prefix for single-task cache keys.
const CACHE_KEY_PREFIX: &str = "task:";
/// Key under which the full task listing is cached.
const LISTING_CACHE_KEY: &str = "task:all";
/// Fixed message for assignment to an unknown user.
const USER_NOT_FOUND: &str = "user was not found";

fn entity_cache_key(id: TaskId) -> String {
    format!("{CACHE_KEY_PREFIX}{id}")
}

/// Infrastructure errors surfaced by task service operations.
///
/// Domain and validation failures never appear here; they are returned as
/// [`OperationOutcome`] values instead.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Task repository failure.
    #[error(transparent)]
    Repository(#[from] crate::task::ports::TaskRepositoryError),
    /// User repository failure during assignment.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
    /// Cache tier failure.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<OperationOutcome<T>, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, U, RC, C>
where
    R: TaskRepository,
    U: UserRepository,
    RC: RemoteCache,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    users: Arc<U>,
    cache: Arc<HybridCache<RC, C>>,
    validator: Arc<dyn TaskValidator>,
    clock: Arc<C>,
}

impl<R, U, RC, C> TaskService<R, U, RC, C>
where
    R: TaskRepository,
    U: UserRepository,
    RC: RemoteCache,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        users: Arc<U>,
        cache: Arc<HybridCache<RC, C>>,
        validator: Arc<dyn TaskValidator>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            users,
            cache,
            validator,
            clock,
        }
    }

    /// Returns every task, served cache-aside under the listing key.
    ///
    /// An absent cache result maps to an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure.
    pub async fn get_all(&self) -> TaskServiceResult<Vec<TaskDto>> {
        let repository = Arc::clone(&self.tasks);
        let listing = self
            .cache
            .get_or_set(LISTING_CACHE_KEY, || async move {
                let tasks = repository.get_all().await.map_err(CacheError::source)?;
                Ok(Some(
                    tasks.iter().map(TaskDto::from_entity).collect::<Vec<_>>(),
                ))
            })
            .await?;
        Ok(OperationOutcome::Ok(listing.unwrap_or_default()))
    }

    /// Returns the task with the given id, served cache-aside.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure; a missing
    /// task is [`OperationOutcome::NotFound`], not an error.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<TaskDto> {
        let repository = Arc::clone(&self.tasks);
        let task = self
            .cache
            .get_or_set(&entity_cache_key(id), || async move {
                repository.get_by_id(id).await.map_err(CacheError::source)
            })
            .await?;
        Ok(task.map_or(OperationOutcome::NotFound, |found| {
            OperationOutcome::Ok(TaskDto::from_entity(&found))
        }))
    }

    /// Validates and persists a new task, then invalidates the listing key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure; input and
    /// domain violations come back as [`OperationOutcome::Invalid`] without
    /// any repository call.
    pub async fn create(&self, request: &CreateTaskRequest) -> TaskServiceResult<TaskDto> {
        let violations = self.validator.validate_create(request);
        if !violations.is_empty() {
            return Ok(OperationOutcome::Invalid(violations));
        }

        let task = match Task::new(
            &request.title,
            &request.description,
            request.deadline,
            &*self.clock,
        ) {
            Ok(task) => task,
            Err(err) => {
                return Ok(OperationOutcome::invalid(field_for(&err), err.to_string()));
            }
        };

        let created = self.tasks.add(&task).await?;
        self.cache.remove(LISTING_CACHE_KEY).await?;
        debug!(id = %created.id(), "task created");
        Ok(OperationOutcome::Ok(TaskDto::from_entity(&created)))
    }

    /// Applies field edits and an optional status transition to an existing
    /// task, re-validates it, persists, and invalidates both cache keys.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure. A missing
    /// task is [`OperationOutcome::NotFound`]; an illegal transition or field
    /// violation is [`OperationOutcome::Invalid`] and leaves persisted state
    /// untouched.
    pub async fn update(&self, request: &UpdateTaskRequest) -> TaskServiceResult<TaskDto> {
        let Some(mut task) = self.tasks.get_by_id(request.id).await? else {
            return Ok(OperationOutcome::NotFound);
        };

        if let Err(err) = task.update(
            &request.title,
            &request.description,
            request.deadline,
            request.status,
            &*self.clock,
        ) {
            return Ok(OperationOutcome::Invalid(vec![FieldError::new(
                field_for(&err),
                err.to_string(),
            )]));
        }

        let violations = self.validator.validate_entity(&task);
        if !violations.is_empty() {
            return Ok(OperationOutcome::Invalid(violations));
        }

        let Some(updated) = self.tasks.update(&task).await? else {
            return Ok(OperationOutcome::NotFound);
        };

        self.invalidate_entity(updated.id()).await?;
        debug!(id = %updated.id(), "task updated");
        Ok(OperationOutcome::Ok(TaskDto::from_entity(&updated)))
    }

    /// Deletes the task with the given id, then invalidates both cache keys.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure; an absent
    /// target is reported as [`OperationOutcome::NotFound`].
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.tasks.delete_by_id(id).await? {
            return Ok(OperationOutcome::NotFound);
        }
        self.invalidate_entity(id).await?;
        debug!(%id, "task deleted");
        Ok(OperationOutcome::Ok(()))
    }

    /// Assigns the task to the user with the given email, persists, and
    /// invalidates both cache keys.
    ///
    /// A missing task is [`OperationOutcome::NotFound`]; a malformed email or
    /// a missing user is [`OperationOutcome::Invalid`] on the `assignee`
    /// field, keeping the two absence cases distinguishable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] on repository or cache failure.
    pub async fn assign_to_user(&self, task_id: TaskId, email: &str) -> TaskServiceResult<TaskDto> {
        let address = match EmailAddress::new(email) {
            Ok(address) => address,
            Err(err) => return Ok(OperationOutcome::invalid("assignee", err.to_string())),
        };

        let Some(mut task) = self.tasks.get_by_id(task_id).await? else {
            return Ok(OperationOutcome::NotFound);
        };
        let Some(user) = self.users.get_by_email(&address).await? else {
            return Ok(OperationOutcome::invalid("assignee", USER_NOT_FOUND));
        };

        task.assign_to_user(&user);
        let Some(updated) = self.tasks.update(&task).await? else {
            return Ok(OperationOutcome::NotFound);
        };

        self.invalidate_entity(task_id).await?;
        debug!(id = %task_id, assignee = %address, "task assigned");
        Ok(OperationOutcome::Ok(TaskDto::from_entity(&updated)))
    }

    /// Evicts the task's own key and the listing key from both tiers.
    async fn invalidate_entity(&self, id: TaskId) -> Result<(), CacheError> {
        self.cache.remove(&entity_cache_key(id)).await?;
        self.cache.remove(LISTING_CACHE_KEY).await
    }
}
