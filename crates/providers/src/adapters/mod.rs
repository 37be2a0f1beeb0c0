//! In-memory adapter implementations of the workflow ports.

mod id_generator;
mod project_store;
mod task_store;
mod user_store;

pub use id_generator::{UuidProjectIdGenerator, UuidTaskIdGenerator, UuidUserIdGenerator};
pub use project_store::InMemoryProjectStore;
pub use task_store::InMemoryTaskStore;
pub use user_store::InMemoryUserStore;
