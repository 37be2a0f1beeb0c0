//! User use cases.

mod commands;
mod create_user;
mod delete_user;
mod read_user;
mod update_user;

// Re-export command types
pub use commands::{
    CreateUserCommand, DeleteUserCommand, ReadUserByIdCommand, ReadUserCommand,
    ReadUserForLoginCommand, UpdateUserCommand,
};

// Re-export services and results
pub use create_user::{CreateUserError, CreateUserResult, CreateUserService};
pub use delete_user::{DeleteUserError, DeleteUserResult, DeleteUserService};
pub use read_user::{ReadUserError, ReadUserResult, ReadUserService};
pub use update_user::{UpdateUserError, UpdateUserResult, UpdateUserService};
