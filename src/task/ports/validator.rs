//! Validator port for task input validation.

use crate::outcome::FieldError;
use crate::task::domain::Task;
use crate::task::services::CreateTaskRequest;

/// Port for task validation.
///
/// Implementations collect every violated rule before returning rather than
/// failing on the first, so callers can report all failures at once. An
/// empty list means valid.
pub trait TaskValidator: Send + Sync {
    /// Validates a creation request.
    fn validate_create(&self, request: &CreateTaskRequest) -> Vec<FieldError>;

    /// Re-validates a mutated task entity before it is persisted.
    fn validate_entity(&self, task: &Task) -> Vec<FieldError>;
}
