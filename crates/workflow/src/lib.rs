//! Use-case layer for the organizer task manager.
//!
//! This crate defines the application's use cases as explicitly injected
//! services. It contains the abstract port definitions (store and
//! id-generator traits) without concrete implementations; adapters live
//! in the providers crate. Every `handle` call returns a `Result` whose
//! error side is a closed, use-case-specific enum; no use case ever
//! panics across its boundary on bad input.

pub mod errors;
pub mod ports;
pub mod workflows;

pub use errors::StoreError;
pub use ports::{IdGenerator, ProjectStore, TaskStore, UserStore};
