//! Validated optional deadline value object.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Optional due-instant for a task.
///
/// Constructed only through validation against the injected clock and the
/// owning task's creation instant; immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(Option<DateTime<Utc>>);

impl Deadline {
    /// Creates a validated deadline.
    ///
    /// An absent instant is always valid. A present instant round-trips
    /// unchanged when it passes validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineInPast`] when the instant lies
    /// strictly before the clock's current instant, or
    /// [`TaskDomainError::DeadlineBeforeCreation`] when it lies before
    /// `created_at`.
    pub fn new(
        value: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if let Some(instant) = value {
            if instant < clock.utc() {
                return Err(TaskDomainError::DeadlineInPast);
            }
            if instant < created_at {
                return Err(TaskDomainError::DeadlineBeforeCreation);
            }
        }
        Ok(Self(value))
    }

    /// Creates an absent deadline.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Returns the wrapped instant, if any.
    #[must_use]
    pub const fn value(self) -> Option<DateTime<Utc>> {
        self.0
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
