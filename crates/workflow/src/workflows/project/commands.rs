//! Command types for the project use cases.

// =============================================================================
// CreateProjectCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectCommand {
    name: Option<String>,
}

impl CreateProjectCommand {
    #[must_use]
    pub const fn new(name: Option<String>) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// =============================================================================
// ReadProjectCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadProjectCommand {
    id: Option<String>,
}

impl ReadProjectCommand {
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
// UpdateProjectCommand
// =============================================================================

/// The project rename; the name is the only updatable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectCommand {
    project_id: Option<String>,
    name: Option<String>,
}

impl UpdateProjectCommand {
    #[must_use]
    pub const fn new(project_id: Option<String>, name: Option<String>) -> Self {
        Self { project_id, name }
    }

    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// =============================================================================
// DeleteProjectCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProjectCommand {
    id: Option<String>,
}

impl DeleteProjectCommand {
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
// AddTaskToProjectCommand
// =============================================================================

/// Attaches an existing task to an existing project by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskToProjectCommand {
    project_id: Option<String>,
    task_id: Option<String>,
}

impl AddTaskToProjectCommand {
    #[must_use]
    pub const fn new(project_id: Option<String>, task_id: Option<String>) -> Self {
        Self {
            project_id,
            task_id,
        }
    }

    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }
}
