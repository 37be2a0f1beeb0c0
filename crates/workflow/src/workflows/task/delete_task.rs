use std::error::Error;
use std::fmt;

use organizer_domain::task::TaskId;

use super::DeleteTaskCommand;
use crate::ports::TaskStore;

// =============================================================================
// DeleteTaskResult
// =============================================================================

pub type DeleteTaskResult = Result<TaskId, DeleteTaskError>;

/// Closed error set for the delete-task use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTaskError {
    MissingTaskId,
    InvalidTaskIdFormat,
    NonExistingTask,
}

impl DeleteTaskError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingTaskId => "task id is missing",
            Self::InvalidTaskIdFormat => "task id has an invalid format",
            Self::NonExistingTask => "task does not exist",
        }
    }
}

impl fmt::Display for DeleteTaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for DeleteTaskError {}

// =============================================================================
// DeleteTaskService
// =============================================================================

/// Deletes a stored task by id.
pub struct DeleteTaskService<T> {
    task_store: T,
}

impl<T: TaskStore> DeleteTaskService<T> {
    #[must_use]
    pub const fn new(task_store: T) -> Self {
        Self { task_store }
    }

    pub fn handle(&self, command: &DeleteTaskCommand) -> DeleteTaskResult {
        let Some(raw_id) = command.id() else {
            return Err(DeleteTaskError::MissingTaskId);
        };
        let task_id: TaskId = raw_id
            .parse()
            .map_err(|_| DeleteTaskError::InvalidTaskIdFormat)?;

        let Some(task) = self.task_store.find_by_id(&task_id) else {
            return Err(DeleteTaskError::NonExistingTask);
        };

        self.task_store.remove(&task);
        Ok(*task.id())
    }
}

// =============================================================================
// Tests
// =============================================================================
