//! Project use cases.

mod add_task;
mod commands;
mod create_project;
mod delete_project;
mod read_project;
mod update_project;

// Re-export command types
pub use commands::{
    AddTaskToProjectCommand, CreateProjectCommand, DeleteProjectCommand, ReadProjectCommand,
    UpdateProjectCommand,
};

// Re-export services and results
pub use add_task::{AddTaskToProjectError, AddTaskToProjectResult, AddTaskToProjectService};
pub use create_project::{CreateProjectError, CreateProjectResult, CreateProjectService};
pub use delete_project::{DeleteProjectError, DeleteProjectResult, DeleteProjectService};
pub use read_project::{ReadProjectError, ReadProjectResult, ReadProjectService};
pub use update_project::{UpdateProjectError, UpdateProjectResult, UpdateProjectService};
