//! Repository port for task persistence and lookup.
//!
//! The backing document store is an external collaborator used as an opaque
//! key-value-by-id store with point reads and writes. Absence is an absent
//! result for point lookups and `false` for deletes, never an error.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Duplicate`] when the identifier is
    /// already present.
    async fn add(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task and returns the updated record.
    ///
    /// Returns `None` when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task by identifier.
    ///
    /// Returns `true` when a record was removed, `false` when the identifier
    /// was absent.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    Duplicate(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
