//! Data transfer shapes crossing the task service boundary.

use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, present only for completed tasks.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due instant.
    pub deadline: Option<DateTime<Utc>>,
    /// Assigned user's email identity, if any.
    pub assigned_user: Option<String>,
}

impl TaskDto {
    /// Maps a task entity to its external representation.
    #[must_use]
    pub fn from_entity(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
            completed_at: task.completed_at(),
            deadline: task.deadline().value(),
            assigned_user: task.assigned_user().map(|email| email.as_str().to_owned()),
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Optional due instant.
    pub deadline: Option<DateTime<Utc>>,
}

/// Input for updating a task's fields and optionally its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    /// Identifier of the task to update.
    pub id: TaskId,
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// New due instant, or `None` to clear it.
    pub deadline: Option<DateTime<Utc>>,
    /// Target status; `None` leaves the status untouched.
    pub status: Option<TaskStatus>,
}
