use organizer_domain::project::ProjectId;
use organizer_workflow::ports::{IdGenerator, ProjectStore, TaskStore};
use organizer_workflow::workflows::project::{
    AddTaskToProjectCommand, AddTaskToProjectResult, AddTaskToProjectService,
    CreateProjectCommand, CreateProjectResult, CreateProjectService, DeleteProjectCommand,
    DeleteProjectResult, DeleteProjectService, ReadProjectCommand, ReadProjectResult,
    ReadProjectService, UpdateProjectCommand, UpdateProjectResult, UpdateProjectService,
};

// =============================================================================
// ProjectProvider
// =============================================================================

/// Bundles the project use cases behind one explicitly constructed
/// value.
///
/// Task membership resolves task ids against the task store, so the
/// provider takes both store handles.
pub struct ProjectProvider<P, T, G>
where
    P: ProjectStore,
    T: TaskStore,
    G: IdGenerator<Id = ProjectId>,
{
    create_project: CreateProjectService<P, G>,
    read_project: ReadProjectService<P>,
    update_project: UpdateProjectService<P>,
    delete_project: DeleteProjectService<P>,
    add_task_to_project: AddTaskToProjectService<P, T>,
}

impl<P, T, G> ProjectProvider<P, T, G>
where
    P: ProjectStore,
    T: TaskStore,
    G: IdGenerator<Id = ProjectId>,
{
    #[must_use]
    pub fn new(project_store: P, task_store: T, id_generator: G) -> Self {
        Self {
            create_project: CreateProjectService::new(project_store.clone(), id_generator),
            read_project: ReadProjectService::new(project_store.clone()),
            update_project: UpdateProjectService::new(project_store.clone()),
            delete_project: DeleteProjectService::new(project_store.clone()),
            add_task_to_project: AddTaskToProjectService::new(project_store, task_store),
        }
    }

    pub fn create(&self, command: &CreateProjectCommand) -> CreateProjectResult {
        self.create_project.handle(command)
    }

    pub fn read(&self, command: &ReadProjectCommand) -> ReadProjectResult {
        self.read_project.handle(command)
    }

    pub fn update(&self, command: &UpdateProjectCommand) -> UpdateProjectResult {
        self.update_project.handle(command)
    }

    pub fn delete(&self, command: &DeleteProjectCommand) -> DeleteProjectResult {
        self.delete_project.handle(command)
    }

    pub fn add_task(&self, command: &AddTaskToProjectCommand) -> AddTaskToProjectResult {
        self.add_task_to_project.handle(command)
    }
}

// =============================================================================
// Tests
// =============================================================================
