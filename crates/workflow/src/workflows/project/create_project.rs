use std::error::Error;
use std::fmt;

use organizer_domain::project::{Project, ProjectId, ProjectName};

use super::CreateProjectCommand;
use crate::ports::{IdGenerator, ProjectStore};

// =============================================================================
// CreateProjectResult
// =============================================================================

pub type CreateProjectResult = Result<ProjectId, CreateProjectError>;

/// Closed error set for the create-project use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateProjectError {
    MissingProjectName,
    InvalidProjectNameFormat,
}

impl CreateProjectError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingProjectName => "project name is missing",
            Self::InvalidProjectNameFormat => "project name has an invalid format",
        }
    }
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for CreateProjectError {}

// =============================================================================
// CreateProjectService
// =============================================================================

/// Creates a project with an empty task list.
pub struct CreateProjectService<P, G> {
    project_store: P,
    id_generator: G,
}

impl<P, G> CreateProjectService<P, G>
where
    P: ProjectStore,
    G: IdGenerator<Id = ProjectId>,
{
    #[must_use]
    pub const fn new(project_store: P, id_generator: G) -> Self {
        Self {
            project_store,
            id_generator,
        }
    }

    pub fn handle(&self, command: &CreateProjectCommand) -> CreateProjectResult {
        let Some(raw_name) = command.name() else {
            return Err(CreateProjectError::MissingProjectName);
        };
        let name =
            ProjectName::new(raw_name).map_err(|_| CreateProjectError::InvalidProjectNameFormat)?;

        let project_id = self.id_generator.generate();
        let project = Project::new(project_id, name);

        self.project_store.save(project);
        Ok(project_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
