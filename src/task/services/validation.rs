//! Default task validator implementation.
//!
//! Applies the domain's field rules one by one, collecting errors to provide
//! comprehensive feedback rather than failing on the first violation.

use super::CreateTaskRequest;
use crate::outcome::FieldError;
use crate::task::domain::{Task, TaskDomainError};
use crate::task::ports::TaskValidator;
use mockable::Clock;
use std::sync::Arc;

/// Maps a domain error to the input field it concerns.
pub(crate) fn field_for(error: &TaskDomainError) -> &'static str {
    match error {
        TaskDomainError::EmptyTitle | TaskDomainError::TitleTooLong => "title",
        TaskDomainError::EmptyDescription => "description",
        TaskDomainError::DeadlineInPast | TaskDomainError::DeadlineBeforeCreation => "deadline",
        TaskDomainError::StartCancelled
        | TaskDomainError::CompleteCancelled
        | TaskDomainError::AlreadyCancelled
        | TaskDomainError::RestartCompleted
        | TaskDomainError::AlreadyCompleted
        | TaskDomainError::CancelCompleted
        | TaskDomainError::AlreadyInProgress
        | TaskDomainError::NotStarted
        | TaskDomainError::InvalidStatus(_)
        | TaskDomainError::InvalidTransition { .. } => "status",
    }
}

fn collect(errors: &mut Vec<FieldError>, result: Result<String, TaskDomainError>) {
    if let Err(err) = result {
        errors.push(FieldError::new(field_for(&err), err.to_string()));
    }
}

/// Default implementation of the task validator port.
///
/// Holds the injected clock so deadline rules are evaluated against a
/// deterministic "now" under test.
pub struct DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a validator evaluating deadline rules against `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }
}

impl<C> TaskValidator for DefaultTaskValidator<C>
where
    C: Clock + Send + Sync,
{
    fn validate_create(&self, request: &CreateTaskRequest) -> Vec<FieldError> {
        let mut errors = Vec::new();
        collect(&mut errors, Task::validate_title(&request.title));
        collect(&mut errors, Task::validate_description(&request.description));
        if let Some(instant) = request.deadline {
            if instant < self.clock.utc() {
                let err = TaskDomainError::DeadlineInPast;
                errors.push(FieldError::new(field_for(&err), err.to_string()));
            }
        }
        errors
    }

    fn validate_entity(&self, task: &Task) -> Vec<FieldError> {
        let mut errors = Vec::new();
        collect(&mut errors, Task::validate_title(task.title()));
        collect(&mut errors, Task::validate_description(task.description()));
        errors
    }
}
