//! Task aggregate root and its lifecycle operations.

use super::{Deadline, TaskDomainError, TaskId, TaskStatus};
use crate::user::domain::{EmailAddress, User};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum number of characters allowed in a task title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Task aggregate root.
///
/// Status changes only through the lifecycle operations below; every one of
/// them consults the transition table before mutating, so no caller can put
/// a task into an unreachable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    deadline: Deadline,
    assigned_user: Option<EmailAddress>,
}

impl Task {
    /// Creates a new pending task.
    ///
    /// Assigns a fresh identifier, stamps `created_at` from the clock, and
    /// validates title, description, and deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is empty or too long, the
    /// description is empty, or the deadline fails validation.
    pub fn new(
        title: &str,
        description: &str,
        deadline: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let created_at = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: Self::validate_title(title)?,
            description: Self::validate_description(description)?,
            status: TaskStatus::Pending,
            created_at,
            completed_at: None,
            deadline: Deadline::new(deadline, created_at, clock)?,
            assigned_user: None,
        })
    }

    /// Validates and normalizes a title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`TaskDomainError::TitleTooLong`] when it exceeds
    /// [`MAX_TITLE_LENGTH`] characters.
    pub fn validate_title(raw: &str) -> Result<String, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong);
        }
        Ok(trimmed.to_owned())
    }

    /// Validates and normalizes a description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the value is empty
    /// after trimming.
    pub fn validate_description(raw: &str) -> Result<String, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        Ok(trimmed.to_owned())
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, set only on the transition into
    /// [`TaskStatus::Completed`].
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns the assigned user's identity, if any.
    #[must_use]
    pub const fn assigned_user(&self) -> Option<&EmailAddress> {
        self.assigned_user.as_ref()
    }

    /// Assigns this task to a user.
    ///
    /// Stores the user's identity only; the task does not own the user's
    /// lifecycle. Reassignment overwrites a previous assignment.
    pub fn assign_to_user(&mut self, user: &User) {
        self.assigned_user = Some(user.email().clone());
    }

    /// Moves the task to the given status after validating the transition.
    ///
    /// This is the only entry point that assigns `status`; the lifecycle
    /// operations below all route through it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the transition
    /// table forbids the move.
    pub fn change_status(&mut self, new_status: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(new_status) {
            return Err(TaskDomainError::InvalidTransition {
                from: self.status,
                to: new_status,
            });
        }
        self.status = new_status;
        Ok(())
    }

    /// Starts work on the task.
    ///
    /// # Errors
    ///
    /// Returns the state-specific [`TaskDomainError`] when the task is
    /// already in progress, completed, or cancelled.
    pub fn start(&mut self) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::Pending => self.change_status(TaskStatus::InProgress),
            TaskStatus::InProgress => Err(TaskDomainError::AlreadyInProgress),
            TaskStatus::Completed => Err(TaskDomainError::RestartCompleted),
            TaskStatus::Cancelled => Err(TaskDomainError::StartCancelled),
        }
    }

    /// Completes the task, stamping `completed_at` from the clock.
    ///
    /// # Errors
    ///
    /// Returns the state-specific [`TaskDomainError`] when the task was
    /// never started, is already completed, or is cancelled.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::InProgress => {
                self.change_status(TaskStatus::Completed)?;
                self.completed_at = Some(clock.utc());
                Ok(())
            }
            TaskStatus::Pending => Err(TaskDomainError::NotStarted),
            TaskStatus::Completed => Err(TaskDomainError::AlreadyCompleted),
            TaskStatus::Cancelled => Err(TaskDomainError::CompleteCancelled),
        }
    }

    /// Cancels the task.
    ///
    /// # Errors
    ///
    /// Returns the state-specific [`TaskDomainError`] when the task is
    /// already cancelled or completed.
    pub fn cancel(&mut self) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::Pending | TaskStatus::InProgress => {
                self.change_status(TaskStatus::Cancelled)
            }
            TaskStatus::Completed => Err(TaskDomainError::CancelCompleted),
            TaskStatus::Cancelled => Err(TaskDomainError::AlreadyCancelled),
        }
    }

    /// Validates a transition to `new_status` and dispatches the matching
    /// lifecycle operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the transition
    /// table forbids the move, including any attempt to target
    /// [`TaskStatus::Pending`].
    pub fn apply_transition(
        &mut self,
        new_status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(new_status) {
            return Err(TaskDomainError::InvalidTransition {
                from: self.status,
                to: new_status,
            });
        }
        match new_status {
            TaskStatus::InProgress => self.start(),
            TaskStatus::Completed => self.complete(clock),
            TaskStatus::Cancelled => self.cancel(),
            TaskStatus::Pending => Err(TaskDomainError::InvalidTransition {
                from: self.status,
                to: new_status,
            }),
        }
    }

    /// Updates scalar fields and optionally applies a status transition.
    ///
    /// Fields are trimmed and only overwritten when the new value differs.
    /// A changed deadline is re-validated against the clock and the creation
    /// instant; an untouched deadline is left as-is. The status changes only
    /// when a differing value is supplied, and then only through
    /// [`Self::apply_transition`]. Field edits and status transition are
    /// independent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a field fails validation or the
    /// status transition is illegal.
    pub fn update(
        &mut self,
        title: &str,
        description: &str,
        deadline: Option<DateTime<Utc>>,
        new_status: Option<TaskStatus>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let new_title = Self::validate_title(title)?;
        if new_title != self.title {
            self.title = new_title;
        }

        let new_description = Self::validate_description(description)?;
        if new_description != self.description {
            self.description = new_description;
        }

        if deadline != self.deadline.value() {
            self.deadline = Deadline::new(deadline, self.created_at, clock)?;
        }

        if let Some(status) = new_status {
            if status != self.status {
                self.apply_transition(status, clock)?;
            }
        }

        Ok(())
    }
}
