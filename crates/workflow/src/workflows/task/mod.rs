//! Task use cases.

mod commands;
mod create_task;
mod delete_task;
mod read_task;
mod update_task;

// Re-export command types
pub use commands::{
    CreateBasicTaskCommand, CreateFullTaskCommand, CreateTaskCommand, DeleteTaskCommand,
    ReadTaskCommand, UpdateTaskCommand,
};

// Re-export services and results
pub use create_task::{CreateTaskError, CreateTaskResult, CreateTaskService};
pub use delete_task::{DeleteTaskError, DeleteTaskResult, DeleteTaskService};
pub use read_task::{ReadTaskError, ReadTaskResult, ReadTaskService};
pub use update_task::{UpdateTaskError, UpdateTaskResult, UpdateTaskService};
