//! Task domain module.
//!
//! - [`TaskId`]: UUID-based unique task identifier
//! - [`TaskName`]: trimmed name, restricted character set
//! - [`TaskDescription`]: free-form text up to 500 characters
//! - [`TaskPriority`] / [`TaskStatus`]: enumerated attributes with defaults
//! - [`Task`]: the aggregate, optionally assigned to a user by id

mod aggregate;
mod attributes;
mod identifier;

pub use aggregate::Task;
pub use attributes::{TaskPriority, TaskStatus};
pub use identifier::{TaskDescription, TaskId, TaskName};
