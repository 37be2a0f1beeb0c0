//! Port definitions consumed by the use-case services.
//!
//! Each port is an abstract persistence or capability boundary. Concrete
//! adapters (the in-memory stores and UUID generators of the providers
//! crate, or a real backend) are supplied to the services at
//! construction. Ports are `Clone` so one shared adapter handle can be
//! cloned into every service that needs it.

use organizer_domain::project::{Project, ProjectId};
use organizer_domain::task::{Task, TaskId};
use organizer_domain::user::{Email, User, UserId, Username};

use crate::errors::StoreError;

// =============================================================================
// UserStore
// =============================================================================

/// Persistence boundary for users, keyed by identity, with uniqueness
/// queries on the secondary keys.
///
/// `save` is an upsert: it inserts a new user or overwrites the stored
/// state of an existing one, and fails when another identity already
/// owns the incoming username or email. `remove` is idempotent;
/// removing an absent user is a no-op.
pub trait UserStore: Clone + 'static {
    fn exists_by_username(&self, username: &Username) -> bool;

    fn exists_by_email(&self, email: &Email) -> bool;

    fn save(&self, user: User) -> Result<(), StoreError>;

    fn remove(&self, user: &User);

    fn find_by_id(&self, id: &UserId) -> Option<User>;

    fn find_by_username(&self, username: &Username) -> Option<User>;

    fn find_by_email(&self, email: &Email) -> Option<User>;

    /// Returns an owned snapshot of every stored user.
    fn find_all(&self) -> Vec<User>;
}

// =============================================================================
// ProjectStore
// =============================================================================

/// Persistence boundary for projects, keyed by identity.
pub trait ProjectStore: Clone + 'static {
    fn save(&self, project: Project);

    fn remove(&self, project: &Project);

    fn find_by_id(&self, id: &ProjectId) -> Option<Project>;

    fn find_all(&self) -> Vec<Project>;
}

// =============================================================================
// TaskStore
// =============================================================================

/// Persistence boundary for tasks, keyed by identity.
pub trait TaskStore: Clone + 'static {
    fn save(&self, task: Task);

    fn remove(&self, task: &Task);

    fn find_by_id(&self, id: &TaskId) -> Option<Task>;

    fn find_all(&self) -> Vec<Task>;
}

// =============================================================================
// IdGenerator
// =============================================================================

/// Capability for producing fresh identity values.
pub trait IdGenerator: Clone + 'static {
    type Id;

    fn generate(&self) -> Self::Id;
}

// =============================================================================
// Test Doubles
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use organizer_domain::user::{Email, User, UserId, Username};
    use rstest::rstest;

    use super::testing::MockUserStore;
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User::new(
            UserId::new(),
            Username::new(username).unwrap(),
            Email::new(email).unwrap(),
        )
    }

    #[rstest]
    fn save_and_find_back_through_every_key() {
        let store = MockUserStore::new();
        let stored = user("alice", "alice@example.org");

        store.save(stored.clone()).unwrap();

        assert_eq!(store.find_by_id(stored.id()), Some(stored.clone()));
        assert_eq!(store.find_by_username(stored.username()), Some(stored.clone()));
        assert_eq!(store.find_by_email(stored.email()), Some(stored));
    }

    #[rstest]
    fn save_rejects_foreign_username() {
        let store = MockUserStore::new();
        store.save(user("alice", "alice@example.org")).unwrap();

        let result = store.save(user("alice", "other@example.org"));

        assert!(matches!(result, Err(StoreError::DuplicateUsername { .. })));
        assert_eq!(store.user_count(), 1);
    }

    #[rstest]
    fn remove_is_idempotent() {
        let store = MockUserStore::new();
        let stored = user("alice", "alice@example.org");
        store.save(stored.clone()).unwrap();

        store.remove(&stored);
        store.remove(&stored);

        assert_eq!(store.user_count(), 0);
    }
}
