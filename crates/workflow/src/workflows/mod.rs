//! Use-case implementations.
//!
//! One service per (entity, operation) pair. Each service owns the port
//! handles it needs, validates its command in declared field order,
//! short-circuits on the first failure, and only then touches the store.
//!
//! # Modules
//!
//! - [`user`]: user lifecycle use cases
//! - [`project`]: project lifecycle and task membership use cases
//! - [`task`]: task lifecycle use cases

pub mod project;
pub mod task;
pub mod user;
