//! Error types for task domain validation and lifecycle transitions.
//!
//! Every variant carries a fixed, human-readable message. Illegal lifecycle
//! actions have state-specific variants rather than one generic message so
//! callers and tests can identify the precise violation.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while constructing or mutating task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the 100-character limit.
    #[error("task title exceeds 100 character limit")]
    TitleTooLong,

    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The deadline lies strictly before the current instant.
    #[error("task deadline cannot be in the past")]
    DeadlineInPast,

    /// The deadline lies before the task's creation instant.
    #[error("task deadline cannot be before task creation")]
    DeadlineBeforeCreation,

    /// Start was invoked on a cancelled task.
    #[error("cannot start a cancelled task")]
    StartCancelled,

    /// Complete was invoked on a cancelled task.
    #[error("cannot complete a cancelled task")]
    CompleteCancelled,

    /// Cancel was invoked on an already cancelled task.
    #[error("task is already cancelled")]
    AlreadyCancelled,

    /// Start was invoked on a completed task.
    #[error("cannot restart a completed task")]
    RestartCompleted,

    /// Complete was invoked on an already completed task.
    #[error("task is already completed")]
    AlreadyCompleted,

    /// Cancel was invoked on a completed task.
    #[error("cannot cancel a completed task")]
    CancelCompleted,

    /// Start was invoked on a task already in progress.
    #[error("task is already in progress")]
    AlreadyInProgress,

    /// Complete was invoked on a task that was never started.
    #[error("task cannot be completed before being started")]
    NotStarted,

    /// A status value could not be recognized.
    #[error("invalid task status: {0}")]
    InvalidStatus(String),

    /// The requested status transition is not in the allowed set.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the caller attempted to move to.
        to: TaskStatus,
    },
}
