//! UUID-backed id generator adapters.
//!
//! One tiny adapter per identity type; each produces a fresh random v4
//! value, which is never the nil identifier.

use organizer_domain::project::ProjectId;
use organizer_domain::task::TaskId;
use organizer_domain::user::UserId;
use organizer_workflow::ports::IdGenerator;

// =============================================================================
// UuidUserIdGenerator
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidUserIdGenerator;

impl UuidUserIdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidUserIdGenerator {
    type Id = UserId;

    fn generate(&self) -> UserId {
        UserId::new()
    }
}

// =============================================================================
// UuidProjectIdGenerator
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProjectIdGenerator;

impl UuidProjectIdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidProjectIdGenerator {
    type Id = ProjectId;

    fn generate(&self) -> ProjectId {
        ProjectId::new()
    }
}

// =============================================================================
// UuidTaskIdGenerator
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIdGenerator;

impl UuidTaskIdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidTaskIdGenerator {
    type Id = TaskId;

    fn generate(&self) -> TaskId {
        TaskId::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
