//! In-memory adapters and provider facades for the organizer.
//!
//! This crate fulfils the ports defined by the workflow layer: in-memory
//! stores keyed by identity (the user store additionally maintains
//! username and email uniqueness indices), UUID-backed id generators,
//! and provider facades that bundle one entity's use-case services
//! behind a single explicitly constructed value. A durable backend is a
//! drop-in replacement for the same ports.

pub mod adapters;
pub mod workflows;

pub use adapters::{
    InMemoryProjectStore, InMemoryTaskStore, InMemoryUserStore, UuidProjectIdGenerator,
    UuidTaskIdGenerator, UuidUserIdGenerator,
};
pub use workflows::{ProjectProvider, TaskProvider, UserProvider};
