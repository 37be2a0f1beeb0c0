use std::error::Error;
use std::fmt;

use organizer_domain::task::{Task, TaskId};

use super::ReadTaskCommand;
use crate::ports::TaskStore;

// =============================================================================
// ReadTaskResult
// =============================================================================

pub type ReadTaskResult = Result<Task, ReadTaskError>;

/// Closed error set for the read-task use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTaskError {
    MissingTaskId,
    InvalidTaskIdFormat,
    NonExistingTask,
}

impl ReadTaskError {
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

impl fmt::Display for ReadTaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for ReadTaskError {}

// =============================================================================
// ReadTaskService
// =============================================================================

/// Looks up a task by id.
pub struct ReadTaskService<T> {
    task_store: T,
}

impl<T: TaskStore> ReadTaskService<T> {
    #[must_use]
    pub const fn new(task_store: T) -> Self {
        Self { task_store }
    }

    pub fn handle(&self, command: &ReadTaskCommand) -> ReadTaskResult {
        let Some(raw_id) = command.id() else {
            return Err(ReadTaskError::MissingTaskId);
        };
        let task_id: TaskId = raw_id
            .parse()
            .map_err(|_| ReadTaskError::InvalidTaskIdFormat)?;

        self.task_store
            .find_by_id(&task_id)
            .ok_or(ReadTaskError::NonExistingTask)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use organizer_domain::task::{TaskDescription, TaskName};
    use rstest::rstest;

    use crate::ports::testing::MockTaskStore;

    #[rstest]
    fn reads_stored_task() {
        let store = MockTaskStore::new();
        let task = Task::new(
            TaskId::new(),
            TaskName::new("Write report").unwrap(),
            TaskDescription::new("Quarterly numbers").unwrap(),
        );
        store.save(task.clone());
        let service = ReadTaskService::new(store);

        let result = service.handle(&ReadTaskCommand::new(Some(task.id().to_string())));

        assert_eq!(result, Ok(task));
    }

    #[rstest]
    fn missing_id() {
        let service = ReadTaskService::new(MockTaskStore::new());

        let result = service.handle(&ReadTaskCommand::new(None));

        assert_eq!(result, Err(ReadTaskError::MissingTaskId));
    }

    #[rstest]
    fn invalid_id_format() {
        let service = ReadTaskService::new(MockTaskStore::new());

        let result = service.handle(&ReadTaskCommand::new(Some("oops".to_string())));

        assert_eq!(result, Err(ReadTaskError::InvalidTaskIdFormat));
    }

    #[rstest]
    fn unknown_id() {
        let service = ReadTaskService::new(MockTaskStore::new());

        let result = service.handle(&ReadTaskCommand::new(Some(TaskId::new().to_string())));

        assert_eq!(result, Err(ReadTaskError::NonExistingTask));
    }
}
