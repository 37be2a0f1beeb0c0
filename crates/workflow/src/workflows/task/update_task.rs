use std::error::Error;
use std::fmt;

use organizer_domain::task::{Task, TaskDescription, TaskId, TaskName, TaskPriority, TaskStatus};
use organizer_domain::user::{UserId, Username};

use super::UpdateTaskCommand;
use crate::ports::{TaskStore, UserStore};

// =============================================================================
// UpdateTaskResult
// =============================================================================

pub type UpdateTaskResult = Result<TaskId, UpdateTaskError>;

/// Closed error set for the update-task use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTaskError {
    MissingTaskId,
    NoFieldsProvided,
    InvalidTaskIdFormat,
    NonExistingTask,
    InvalidTaskNameFormat,
    InvalidTaskDescriptionFormat,
    InvalidTaskPriorityFormat,
    InvalidTaskStatusFormat,
    InvalidUsernameFormat,
    NonExistingUser,
}

impl UpdateTaskError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingTaskId => "task id is missing",
            Self::NoFieldsProvided => "no fields provided",
            Self::InvalidTaskIdFormat => "task id has an invalid format",
            Self::NonExistingTask => "task does not exist",
            Self::InvalidTaskNameFormat => "task name has an invalid format",
            Self::InvalidTaskDescriptionFormat => "task description has an invalid format",
            Self::InvalidTaskPriorityFormat => "task priority has an invalid format",
            Self::InvalidTaskStatusFormat => "task status has an invalid format",
            Self::InvalidUsernameFormat => "username has an invalid format",
            Self::NonExistingUser => "user does not exist",
        }
    }
}

impl fmt::Display for UpdateTaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for UpdateTaskError {}

// =============================================================================
// UpdateTaskService
// =============================================================================

/// Field-wise optional update of a stored task.
///
/// Every present field is validated and applied; absent fields carry
/// the stored values over, including the assignee. Unlike the user
/// update there is no `NoChanges` rejection; re-applying the stored
/// values is a valid update here.
pub struct UpdateTaskService<T, U> {
    task_store: T,
    user_store: U,
}

impl<T, U> UpdateTaskService<T, U>
where
    T: TaskStore,
    U: UserStore,
{
    #[must_use]
    pub const fn new(task_store: T, user_store: U) -> Self {
        Self {
            task_store,
            user_store,
        }
    }

    pub fn handle(&self, command: &UpdateTaskCommand) -> UpdateTaskResult {
        let Some(raw_id) = command.task_id() else {
            return Err(UpdateTaskError::MissingTaskId);
        };
        if command.is_empty() {
            return Err(UpdateTaskError::NoFieldsProvided);
        }

        let task_id: TaskId = raw_id
            .parse()
            .map_err(|_| UpdateTaskError::InvalidTaskIdFormat)?;
        let Some(current) = self.task_store.find_by_id(&task_id) else {
            return Err(UpdateTaskError::NonExistingTask);
        };

        let name = match command.name() {
            Some(raw) => TaskName::new(raw).map_err(|_| UpdateTaskError::InvalidTaskNameFormat)?,
            None => current.name().clone(),
        };
        let description = match command.description() {
            Some(raw) => TaskDescription::new(raw)
                .map_err(|_| UpdateTaskError::InvalidTaskDescriptionFormat)?,
            None => current.description().clone(),
        };
        let priority: TaskPriority = match command.priority() {
            Some(raw) => raw
                .parse()
                .map_err(|_| UpdateTaskError::InvalidTaskPriorityFormat)?,
            None => current.priority(),
        };
        let status: TaskStatus = match command.status() {
            Some(raw) => raw
                .parse()
                .map_err(|_| UpdateTaskError::InvalidTaskStatusFormat)?,
            None => current.status(),
        };
        let assignee: Option<UserId> = match command.username() {
            Some(raw) => {
                let username =
                    Username::new(raw).map_err(|_| UpdateTaskError::InvalidUsernameFormat)?;
                let Some(user) = self.user_store.find_by_username(&username) else {
                    return Err(UpdateTaskError::NonExistingUser);
                };
                Some(*user.id())
            }
            None => current.assignee(),
        };

        let updated = Task::with_details(task_id, name, description, priority, status, assignee);
        self.task_store.save(updated);
        Ok(task_id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use organizer_domain::user::{Email, User};
    use rstest::rstest;

    use crate::ports::testing::{MockTaskStore, MockUserStore};

    fn stored_task(store: &MockTaskStore) -> Task {
        let task = Task::new(
            TaskId::new(),
            TaskName::new("Write report").unwrap(),
            TaskDescription::new("Quarterly numbers").unwrap(),
        );
        store.save(task.clone());
        task
    }

    fn stored_user(store: &MockUserStore, username: &str) -> User {
        let user = User::new(
            UserId::new(),
            Username::new(username).unwrap(),
            Email::new(format!("{username}@example.org")).unwrap(),
        );
        store.save(user.clone()).unwrap();
        user
    }

    fn command_with_priority(task_id: &TaskId, priority: &str) -> UpdateTaskCommand {
        UpdateTaskCommand::new(
            Some(task_id.to_string()),
            None,
            None,
            Some(priority.to_string()),
            None,
            None,
        )
    }

    #[rstest]
    fn priority_only_update_keeps_every_other_field() {
        let task_store = MockTaskStore::new();
        let user_store = MockUserStore::new();
        let user = stored_user(&user_store, "alice");
        let original = stored_task(&task_store).assign_user(*user.id());
        task_store.save(original.clone());
        let service = UpdateTaskService::new(task_store.clone(), user_store);

        let result = service.handle(&command_with_priority(original.id(), "HIGH"));

        assert_eq!(result, Ok(*original.id()));
        let updated = task_store.find_by_id(original.id()).unwrap();
        assert_eq!(updated.priority(), TaskPriority::High);
        assert_eq!(updated.name(), original.name());
        assert_eq!(updated.description(), original.description());
        assert_eq!(updated.status(), original.status());
        assert_eq!(updated.assignee(), Some(*user.id()));
    }

    #[rstest]
    fn reassigns_to_resolved_user() {
        let task_store = MockTaskStore::new();
        let user_store = MockUserStore::new();
        let user = stored_user(&user_store, "carol");
        let task = stored_task(&task_store);
        let service = UpdateTaskService::new(task_store.clone(), user_store);

        let command = UpdateTaskCommand::new(
            Some(task.id().to_string()),
            None,
            None,
            None,
            None,
            Some("carol".to_string()),
        );
        let result = service.handle(&command);

        assert_eq!(result, Ok(*task.id()));
        assert_eq!(
            task_store.find_by_id(task.id()).unwrap().assignee(),
            Some(*user.id())
        );
    }

    #[rstest]
    fn missing_id_reported_before_empty_fields() {
        let service = UpdateTaskService::new(MockTaskStore::new(), MockUserStore::new());

        let command = UpdateTaskCommand::new(None, None, None, None, None, None);
        let result = service.handle(&command);

        assert_eq!(result, Err(UpdateTaskError::MissingTaskId));
    }

    #[rstest]
    fn no_fields_provided() {
        let service = UpdateTaskService::new(MockTaskStore::new(), MockUserStore::new());

        let command =
            UpdateTaskCommand::new(Some(TaskId::new().to_string()), None, None, None, None, None);
        let result = service.handle(&command);

        assert_eq!(result, Err(UpdateTaskError::NoFieldsProvided));
    }

    #[rstest]
    fn invalid_id_format() {
        let service = UpdateTaskService::new(MockTaskStore::new(), MockUserStore::new());

        let result = service.handle(&UpdateTaskCommand::new(
            Some("oops".to_string()),
            Some("name".to_string()),
            None,
            None,
            None,
            None,
        ));

        assert_eq!(result, Err(UpdateTaskError::InvalidTaskIdFormat));
    }

    #[rstest]
    fn unknown_task() {
        let service = UpdateTaskService::new(MockTaskStore::new(), MockUserStore::new());

        let result = service.handle(&command_with_priority(&TaskId::new(), "LOW"));

        assert_eq!(result, Err(UpdateTaskError::NonExistingTask));
    }

    #[rstest]
    fn invalid_priority_leaves_task_unchanged() {
        let task_store = MockTaskStore::new();
        let task = stored_task(&task_store);
        let service = UpdateTaskService::new(task_store.clone(), MockUserStore::new());

        let result = service.handle(&command_with_priority(task.id(), "urgent"));

        assert_eq!(result, Err(UpdateTaskError::InvalidTaskPriorityFormat));
        assert_eq!(task_store.find_by_id(task.id()).unwrap(), task);
    }

    #[rstest]
    fn unresolved_username() {
        let task_store = MockTaskStore::new();
        let task = stored_task(&task_store);
        let service = UpdateTaskService::new(task_store, MockUserStore::new());

        let command = UpdateTaskCommand::new(
            Some(task.id().to_string()),
            None,
            None,
            None,
            None,
            Some("nobody".to_string()),
        );
        let result = service.handle(&command);

        assert_eq!(result, Err(UpdateTaskError::NonExistingUser));
    }

    #[rstest]
    fn reapplying_stored_values_is_accepted() {
        // No NoChanges rejection on task updates.
        let task_store = MockTaskStore::new();
        let task = stored_task(&task_store);
        let service = UpdateTaskService::new(task_store, MockUserStore::new());

        let result = service.handle(&command_with_priority(task.id(), "MEDIUM"));

        assert_eq!(result, Ok(*task.id()));
    }
}
