use std::error::Error;
use std::fmt;

use organizer_domain::project::ProjectId;

use super::DeleteProjectCommand;
use crate::ports::ProjectStore;

// =============================================================================
// DeleteProjectResult
// =============================================================================

pub type DeleteProjectResult = Result<ProjectId, DeleteProjectError>;

/// Closed error set for the delete-project use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteProjectError {
    MissingProjectId,
    InvalidProjectIdFormat,
    NonExistingProject,
}

impl DeleteProjectError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingProjectId => "project id is missing",
            Self::InvalidProjectIdFormat => "project id has an invalid format",
            Self::NonExistingProject => "project does not exist",
        }
    }
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for DeleteProjectError {}

// =============================================================================
// DeleteProjectService
// =============================================================================

/// Deletes a stored project by id.
///
/// The referenced tasks themselves stay in the task store; only the
/// membership list disappears with the project.
pub struct DeleteProjectService<P> {
    project_store: P,
}

impl<P: ProjectStore> DeleteProjectService<P> {
    #[must_use]
    pub const fn new(project_store: P) -> Self {
        Self { project_store }
    }

    pub fn handle(&self, command: &DeleteProjectCommand) -> DeleteProjectResult {
        let Some(raw_id) = command.id() else {
            return Err(DeleteProjectError::MissingProjectId);
        };
        let project_id: ProjectId = raw_id
            .parse()
            .map_err(|_| DeleteProjectError::InvalidProjectIdFormat)?;

        let Some(project) = self.project_store.find_by_id(&project_id) else {
            return Err(DeleteProjectError::NonExistingProject);
        };

        self.project_store.remove(&project);
        Ok(project_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
