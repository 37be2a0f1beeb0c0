use std::error::Error;
use std::fmt;

use organizer_domain::project::{ProjectId, ProjectName};

use super::UpdateProjectCommand;
use crate::ports::ProjectStore;

// =============================================================================
// UpdateProjectResult
// =============================================================================

pub type UpdateProjectResult = Result<ProjectId, UpdateProjectError>;

/// Closed error set for the update-project use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateProjectError {
    NoFieldsProvided,
    MissingProjectId,
    InvalidProjectIdFormat,
    NonExistingProject,
    InvalidProjectNameFormat,
}

impl UpdateProjectError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoFieldsProvided => "no fields provided",
            Self::MissingProjectId => "project id is missing",
            Self::InvalidProjectIdFormat => "project id has an invalid format",
            Self::NonExistingProject => "project does not exist",
            Self::InvalidProjectNameFormat => "project name has an invalid format",
        }
    }
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for UpdateProjectError {}

// =============================================================================
// UpdateProjectService
// =============================================================================

/// Renames a stored project.
///
/// The name is the only updatable field; the task list carries over
/// untouched. Renaming to the current name is accepted; there is no
/// `NoChanges` rejection on projects.
pub struct UpdateProjectService<P> {
    project_store: P,
}

impl<P: ProjectStore> UpdateProjectService<P> {
    #[must_use]
    pub const fn new(project_store: P) -> Self {
        Self { project_store }
    }

    pub fn handle(&self, command: &UpdateProjectCommand) -> UpdateProjectResult {
        let Some(raw_name) = command.name() else {
            return Err(UpdateProjectError::NoFieldsProvided);
        };

        let Some(raw_id) = command.project_id() else {
            return Err(UpdateProjectError::MissingProjectId);
        };
        let project_id: ProjectId = raw_id
            .parse()
            .map_err(|_| UpdateProjectError::InvalidProjectIdFormat)?;

        let Some(project) = self.project_store.find_by_id(&project_id) else {
            return Err(UpdateProjectError::NonExistingProject);
        };

        let name = ProjectName::new(raw_name)
            .map_err(|_| UpdateProjectError::InvalidProjectNameFormat)?;

        self.project_store.save(project.rename(name));
        Ok(project_id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use organizer_domain::project::Project;
    use organizer_domain::task::TaskId;
    use rstest::rstest;

    use crate::ports::testing::MockProjectStore;

    fn stored_project(store: &MockProjectStore) -> Project {
        let project = Project::new(ProjectId::new(), ProjectName::new("Backlog").unwrap());
        store.save(project.clone());
        project
    }

    fn command(project_id: Option<String>, name: Option<&str>) -> UpdateProjectCommand {
        UpdateProjectCommand::new(project_id, name.map(str::to_string))
    }

    #[rstest]
    fn renames_and_keeps_task_list() {
        let store = MockProjectStore::new();
        let task_id = TaskId::new();
        let project = stored_project(&store).add_task(task_id).unwrap();
        store.save(project.clone());
        let service = UpdateProjectService::new(store.clone());

        let result = service.handle(&command(Some(project.id().to_string()), Some("Icebox")));

        assert_eq!(result, Ok(*project.id()));
        let updated = store.find_by_id(project.id()).unwrap();
        assert_eq!(updated.name().value(), "Icebox");
        assert_eq!(updated.task_list(), &[task_id]);
    }

    #[rstest]
    fn no_fields_reported_before_missing_id() {
        let service = UpdateProjectService::new(MockProjectStore::new());

        assert_eq!(
            service.handle(&command(None, None)),
            Err(UpdateProjectError::NoFieldsProvided)
        );
    }

    #[rstest]
    fn missing_id() {
        let service = UpdateProjectService::new(MockProjectStore::new());

        assert_eq!(
            service.handle(&command(None, Some("Icebox"))),
            Err(UpdateProjectError::MissingProjectId)
        );
    }

    #[rstest]
    fn invalid_id_format() {
        let service = UpdateProjectService::new(MockProjectStore::new());

        assert_eq!(
            service.handle(&command(Some("oops".to_string()), Some("Icebox"))),
            Err(UpdateProjectError::InvalidProjectIdFormat)
        );
    }

    #[rstest]
    fn unknown_project() {
        let service = UpdateProjectService::new(MockProjectStore::new());

        assert_eq!(
            service.handle(&command(Some(ProjectId::new().to_string()), Some("Icebox"))),
            Err(UpdateProjectError::NonExistingProject)
        );
    }

    #[rstest]
    fn invalid_name_leaves_project_unchanged() {
        let store = MockProjectStore::new();
        let project = stored_project(&store);
        let service = UpdateProjectService::new(store.clone());

        let result = service.handle(&command(Some(project.id().to_string()), Some("   ")));

        assert_eq!(result, Err(UpdateProjectError::InvalidProjectNameFormat));
        assert_eq!(store.find_by_id(project.id()).unwrap(), project);
    }

    #[rstest]
    fn renaming_to_current_name_is_accepted() {
        let store = MockProjectStore::new();
        let project = stored_project(&store);
        let service = UpdateProjectService::new(store);

        let result = service.handle(&command(Some(project.id().to_string()), Some("Backlog")));

        assert_eq!(result, Ok(*project.id()));
    }
}
