use crate::project::{ProjectError, ProjectId, ProjectName};
use crate::task::TaskId;

// =============================================================================
// Project
// =============================================================================

/// Project aggregate.
///
/// A project owns its name and an ordered list of task references. Tasks
/// are referenced by id only; the tasks themselves live in the task
/// store. A given task id appears at most once, and the list is exposed
/// only as a read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    tasks: Vec<TaskId>,
}

impl Project {
    #[must_use]
    pub fn new(id: ProjectId, name: ProjectName) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the task ids in insertion order.
    #[must_use]
    pub fn task_list(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Replaces the project name unconditionally.
    ///
    /// No-op renames are accepted; only [`crate::user::User`]'s change
    /// operations reject them.
    #[must_use]
    pub fn rename(self, name: ProjectName) -> Self {
        Self { name, ..self }
    }

    /// Appends a task reference, preserving insertion order.
    ///
    /// Fails when the id is already present; the task list is left at its
    /// prior length in that case.
    pub fn add_task(self, task_id: TaskId) -> Result<Self, ProjectError> {
        if self.tasks.contains(&task_id) {
            return Err(ProjectError::duplicate_task(task_id.to_string()));
        }

        let mut tasks = self.tasks;
        tasks.push(task_id);
        Ok(Self { tasks, ..self })
    }
}

// =============================================================================
// Tests
// =============================================================================
