use std::error::Error;
use std::fmt;

use organizer_domain::project::ProjectId;
use organizer_domain::task::TaskId;

use super::AddTaskToProjectCommand;
use crate::ports::{ProjectStore, TaskStore};

// =============================================================================
// AddTaskToProjectResult
// =============================================================================

pub type AddTaskToProjectResult = Result<ProjectId, AddTaskToProjectError>;

/// Closed error set for the add-task-to-project use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTaskToProjectError {
    MissingProjectId,
    InvalidProjectIdFormat,
    NonExistingProject,
    MissingTaskId,
    InvalidTaskIdFormat,
    NonExistingTask,
    TaskAlreadyInProject,
}

impl AddTaskToProjectError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingProjectId => "project id is missing",
            Self::InvalidProjectIdFormat => "project id has an invalid format",
            Self::NonExistingProject => "project does not exist",
            Self::MissingTaskId => "task id is missing",
            Self::InvalidTaskIdFormat => "task id has an invalid format",
            Self::NonExistingTask => "task does not exist",
            Self::TaskAlreadyInProject => "task is already in the project",
        }
    }
}

impl fmt::Display for AddTaskToProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for AddTaskToProjectError {}

// =============================================================================
// AddTaskToProjectService
// =============================================================================

/// Appends an existing task to an existing project's task list.
///
/// Both ids must resolve before anything is written; a task id already
/// present in the project is rejected and leaves the list unchanged.
pub struct AddTaskToProjectService<P, T> {
    project_store: P,
    task_store: T,
}

impl<P, T> AddTaskToProjectService<P, T>
where
    P: ProjectStore,
    T: TaskStore,
{
    #[must_use]
    pub const fn new(project_store: P, task_store: T) -> Self {
        Self {
            project_store,
            task_store,
        }
    }

    pub fn handle(&self, command: &AddTaskToProjectCommand) -> AddTaskToProjectResult {
        let Some(raw_project_id) = command.project_id() else {
            return Err(AddTaskToProjectError::MissingProjectId);
        };
        let project_id: ProjectId = raw_project_id
            .parse()
            .map_err(|_| AddTaskToProjectError::InvalidProjectIdFormat)?;
        let Some(project) = self.project_store.find_by_id(&project_id) else {
            return Err(AddTaskToProjectError::NonExistingProject);
        };

        let Some(raw_task_id) = command.task_id() else {
            return Err(AddTaskToProjectError::MissingTaskId);
        };
        let task_id: TaskId = raw_task_id
            .parse()
            .map_err(|_| AddTaskToProjectError::InvalidTaskIdFormat)?;
        if self.task_store.find_by_id(&task_id).is_none() {
            return Err(AddTaskToProjectError::NonExistingTask);
        }

        let project = project
            .add_task(task_id)
            .map_err(|_| AddTaskToProjectError::TaskAlreadyInProject)?;

        self.project_store.save(project);
        Ok(project_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
