use std::error::Error;
use std::fmt;

use organizer_domain::project::{Project, ProjectId};

use super::ReadProjectCommand;
use crate::ports::ProjectStore;

// =============================================================================
// ReadProjectResult
// =============================================================================

pub type ReadProjectResult = Result<Project, ReadProjectError>;

/// Closed error set for the read-project use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadProjectError {
    MissingProjectId,
    InvalidProjectIdFormat,
    NonExistingProject,
}

impl ReadProjectError {
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

impl fmt::Display for ReadProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for ReadProjectError {}

// =============================================================================
// ReadProjectService
// =============================================================================

/// Looks up a project by id.
pub struct ReadProjectService<P> {
    project_store: P,
}

impl<P: ProjectStore> ReadProjectService<P> {
    #[must_use]
    pub const fn new(project_store: P) -> Self {
        Self { project_store }
    }

    pub fn handle(&self, command: &ReadProjectCommand) -> ReadProjectResult {
        let Some(raw_id) = command.id() else {
            return Err(ReadProjectError::MissingProjectId);
        };
        let project_id: ProjectId = raw_id
            .parse()
            .map_err(|_| ReadProjectError::InvalidProjectIdFormat)?;

        self.project_store
            .find_by_id(&project_id)
            .ok_or(ReadProjectError::NonExistingProject)
    }
}

// =============================================================================
// Tests
// =============================================================================
