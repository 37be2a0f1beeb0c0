//! Command types for the task use cases.
//!
//! Raw input throughout: priority and status travel as their wire names
//! (`LOW`, `IN_PROGRESS`, …) and the assignee as a username, resolved
//! against the user store inside the services.

// =============================================================================
// CreateTaskCommand
// =============================================================================

/// Create commands: the basic variant gets default priority, status, and
/// no assignee; the full variant specifies everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateTaskCommand {
    Basic(CreateBasicTaskCommand),
    Full(CreateFullTaskCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBasicTaskCommand {
    name: Option<String>,
    description: Option<String>,
}

impl CreateBasicTaskCommand {
    #[must_use]
    pub const fn new(name: Option<String>, description: Option<String>) -> Self {
        Self { name, description }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFullTaskCommand {
    name: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    username: Option<String>,
}

impl CreateFullTaskCommand {
    #[must_use]
    pub const fn new(
        name: Option<String>,
        description: Option<String>,
        priority: Option<String>,
        status: Option<String>,
        username: Option<String>,
    ) -> Self {
        Self {
            name,
            description,
            priority,
            status,
            username,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

// =============================================================================
// ReadTaskCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTaskCommand {
    id: Option<String>,
}

impl ReadTaskCommand {
    #[must_use]
    pub const fn new(id: Option<String>) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

// =============================================================================
// UpdateTaskCommand
// =============================================================================

/// Field-wise optional update: an absent field keeps the stored value,
/// including the assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskCommand {
    task_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    username: Option<String>,
}

impl UpdateTaskCommand {
    #[must_use]
    pub const fn new(
        task_id: Option<String>,
        name: Option<String>,
        description: Option<String>,
        priority: Option<String>,
        status: Option<String>,
        username: Option<String>,
    ) -> Self {
        Self {
            task_id,
            name,
            description,
            priority,
            status,
            username,
        }
    }

    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns true when no updatable field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.username.is_none()
    }
}

// =============================================================================
// DeleteTaskCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTaskCommand {
    id: Option<String>,
}

impl DeleteTaskCommand {
    #[must_use]
    pub const fn new(id: Option<String>) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
