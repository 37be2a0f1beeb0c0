use std::error::Error;
use std::fmt;

use organizer_domain::task::{Task, TaskDescription, TaskId, TaskName, TaskPriority, TaskStatus};
use organizer_domain::user::Username;

use super::{CreateBasicTaskCommand, CreateFullTaskCommand, CreateTaskCommand};
use crate::ports::{IdGenerator, TaskStore, UserStore};

// =============================================================================
// CreateTaskResult
// =============================================================================

pub type CreateTaskResult = Result<TaskId, CreateTaskError>;

/// Closed error set for the create-task use case, covering both the
/// basic and the full command variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTaskError {
    MissingTaskName,
    InvalidTaskNameFormat,
    MissingTaskDescription,
    InvalidTaskDescriptionFormat,
    MissingTaskPriority,
    InvalidTaskPriorityName,
    MissingTaskStatus,
    InvalidTaskStatusName,
    MissingUsername,
    InvalidUsernameFormat,
    NonExistingUser,
}

impl CreateTaskError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingTaskName => "task name is missing",
            Self::InvalidTaskNameFormat => "task name has an invalid format",
            Self::MissingTaskDescription => "task description is missing",
            Self::InvalidTaskDescriptionFormat => "task description has an invalid format",
            Self::MissingTaskPriority => "task priority is missing",
            Self::InvalidTaskPriorityName => "task priority is not a known name",
            Self::MissingTaskStatus => "task status is missing",
            Self::InvalidTaskStatusName => "task status is not a known name",
            Self::MissingUsername => "username is missing",
            Self::InvalidUsernameFormat => "username has an invalid format",
            Self::NonExistingUser => "user does not exist",
        }
    }
}

impl fmt::Display for CreateTaskError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for CreateTaskError {}

// =============================================================================
// CreateTaskService
// =============================================================================

/// Creates a task from raw input.
///
/// The basic variant validates name and description and applies the
/// default priority, status, and no assignee. The full variant
/// additionally parses the priority and status wire names and resolves
/// the assignee's username against the user store.
pub struct CreateTaskService<T, U, G> {
    task_store: T,
    user_store: U,
    id_generator: G,
}

impl<T, U, G> CreateTaskService<T, U, G>
where
    T: TaskStore,
    U: UserStore,
    G: IdGenerator<Id = TaskId>,
{
    #[must_use]
    pub const fn new(task_store: T, user_store: U, id_generator: G) -> Self {
        Self {
            task_store,
            user_store,
            id_generator,
        }
    }

    pub fn handle(&self, command: &CreateTaskCommand) -> CreateTaskResult {
        match command {
            CreateTaskCommand::Basic(basic) => self.handle_basic(basic),
            CreateTaskCommand::Full(full) => self.handle_full(full),
        }
    }

    fn handle_basic(&self, command: &CreateBasicTaskCommand) -> CreateTaskResult {
        let (name, description) = parse_basic(command.name(), command.description())?;

        let task_id = self.id_generator.generate();
        let task = Task::new(task_id, name, description);

        self.task_store.save(task);
        Ok(task_id)
    }

    fn handle_full(&self, command: &CreateFullTaskCommand) -> CreateTaskResult {
        let (name, description) = parse_basic(command.name(), command.description())?;

        let Some(raw_priority) = command.priority() else {
            return Err(CreateTaskError::MissingTaskPriority);
        };
        let priority: TaskPriority = raw_priority
            .parse()
            .map_err(|_| CreateTaskError::InvalidTaskPriorityName)?;

        let Some(raw_status) = command.status() else {
            return Err(CreateTaskError::MissingTaskStatus);
        };
        let status: TaskStatus = raw_status
            .parse()
            .map_err(|_| CreateTaskError::InvalidTaskStatusName)?;

        let Some(raw_username) = command.username() else {
            return Err(CreateTaskError::MissingUsername);
        };
        let username =
            Username::new(raw_username).map_err(|_| CreateTaskError::InvalidUsernameFormat)?;
        let Some(assignee) = self.user_store.find_by_username(&username) else {
            return Err(CreateTaskError::NonExistingUser);
        };

        let task_id = self.id_generator.generate();
        let task = Task::with_details(
            task_id,
            name,
            description,
            priority,
            status,
            Some(*assignee.id()),
        );

        self.task_store.save(task);
        Ok(task_id)
    }
}

/// Validates the name and description shared by both command variants.
fn parse_basic(
    name: Option<&str>,
    description: Option<&str>,
) -> Result<(TaskName, TaskDescription), CreateTaskError> {
    let Some(raw_name) = name else {
        return Err(CreateTaskError::MissingTaskName);
    };
    let task_name = TaskName::new(raw_name).map_err(|_| CreateTaskError::InvalidTaskNameFormat)?;

    let Some(raw_description) = description else {
        return Err(CreateTaskError::MissingTaskDescription);
    };
    let task_description = TaskDescription::new(raw_description)
        .map_err(|_| CreateTaskError::InvalidTaskDescriptionFormat)?;

    Ok((task_name, task_description))
}

// =============================================================================
// Tests
// =============================================================================
