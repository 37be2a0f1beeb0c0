use crate::task::{TaskDescription, TaskId, TaskName, TaskPriority, TaskStatus};
use crate::user::UserId;

// =============================================================================
// Task
// =============================================================================

/// Task aggregate.
///
/// A task owns its name, description, priority, and status. The assignee
/// is a weak by-id reference to a user; the task does not own the user's
/// lifecycle, and deleting a user leaves the reference in place.
///
/// Unlike [`crate::user::User`], the change operations here replace
/// their field unconditionally; a no-op change is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: TaskDescription,
    priority: TaskPriority,
    status: TaskStatus,
    assignee: Option<UserId>,
}

impl Task {
    /// Creates a task with the default priority (`Medium`), the default
    /// status (`Todo`), and no assignee.
    #[must_use]
    pub fn new(id: TaskId, name: TaskName, description: TaskDescription) -> Self {
        Self {
            id,
            name,
            description,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            assignee: None,
        }
    }

    /// Creates a fully specified task.
    #[must_use]
    pub fn with_details(
        id: TaskId,
        name: TaskName,
        description: TaskDescription,
        priority: TaskPriority,
        status: TaskStatus,
        assignee: Option<UserId>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            priority,
            status,
            assignee,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    #[must_use]
    pub fn change_name(self, name: TaskName) -> Self {
        Self { name, ..self }
    }

    #[must_use]
    pub fn change_description(self, description: TaskDescription) -> Self {
        Self {
            description,
            ..self
        }
    }

    #[must_use]
    pub fn change_priority(self, priority: TaskPriority) -> Self {
        Self { priority, ..self }
    }

    #[must_use]
    pub fn change_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }

    /// Assigns the task to a user, replacing any current assignee.
    #[must_use]
    pub fn assign_user(self, user_id: UserId) -> Self {
        Self {
            assignee: Some(user_id),
            ..self
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
