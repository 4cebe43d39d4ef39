//! In-memory repository for task service and lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|tasks| tasks.len()).unwrap_or(0)
    }

    /// Returns `true` when no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.values().cloned().collect())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn add(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::Duplicate(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        if !tasks.contains_key(&task.id()) {
            return Ok(None);
        }
        tasks.insert(task.id(), task.clone());
        Ok(Some(task.clone()))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        Ok(tasks.remove(&id).is_some())
    }
}
