//! In-memory implementation of the [`UserStore`] port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use organizer_domain::user::{Email, User, UserId, Username};
use organizer_workflow::errors::StoreError;
use organizer_workflow::ports::UserStore;

// =============================================================================
// InMemoryUserStore
// =============================================================================

#[derive(Debug, Default)]
struct UserIndices {
    by_id: HashMap<UserId, User>,
    by_username: HashMap<Username, UserId>,
    by_email: HashMap<Email, UserId>,
}

/// In-memory user store with uniqueness indices.
///
/// Three maps live behind a single lock: the by-id map owns the stored
/// users, and the username/email indices resolve to ids. Every write
/// updates all three under one write guard, so a reader can never
/// observe the indices in a partially updated state relative to each
/// other. Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    indices: Arc<RwLock<UserIndices>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn exists_by_username(&self, username: &Username) -> bool {
        self.indices
            .read()
            .expect("user store lock poisoned")
            .by_username
            .contains_key(username)
    }

    fn exists_by_email(&self, email: &Email) -> bool {
        self.indices
            .read()
            .expect("user store lock poisoned")
            .by_email
            .contains_key(email)
    }

    /// Upserts a user.
    ///
    /// Fails when another id owns the incoming username or email.
    /// Re-saving an unchanged user is a no-op; when the username or
    /// email changed, the old index entries are dropped before the new
    /// ones are inserted, so no orphaned entries remain.
    fn save(&self, user: User) -> Result<(), StoreError> {
        let mut indices = self.indices.write().expect("user store lock poisoned");

        if let Some(owner) = indices.by_username.get(user.username()) {
            if owner != user.id() {
                return Err(StoreError::duplicate_username(user.username().value()));
            }
        }
        if let Some(owner) = indices.by_email.get(user.email()) {
            if owner != user.id() {
                return Err(StoreError::duplicate_email(user.email().to_string()));
            }
        }

        let unchanged = indices.by_id.get(user.id()).is_some_and(|existing| {
            existing.username() == user.username() && existing.email() == user.email()
        });
        if unchanged {
            tracing::trace!("user {} unchanged, skipping save", user.id());
            return Ok(());
        }

        if let Some(previous) = indices.by_id.remove(user.id()) {
            indices.by_username.remove(previous.username());
            indices.by_email.remove(previous.email());
        }

        tracing::debug!("saving user {} as '{}'", user.id(), user.username());
        indices
            .by_username
            .insert(user.username().clone(), *user.id());
        indices.by_email.insert(user.email().clone(), *user.id());
        indices.by_id.insert(*user.id(), user);
        Ok(())
    }

    /// Removes a user from every index; removing an absent user is a
    /// no-op.
    fn remove(&self, user: &User) {
        let mut indices = self.indices.write().expect("user store lock poisoned");

        if let Some(stored) = indices.by_id.remove(user.id()) {
            indices.by_username.remove(stored.username());
            indices.by_email.remove(stored.email());
            tracing::debug!("removed user {}", user.id());
        }
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.indices
            .read()
            .expect("user store lock poisoned")
            .by_id
            .get(id)
            .cloned()
    }

    fn find_by_username(&self, username: &Username) -> Option<User> {
        let indices = self.indices.read().expect("user store lock poisoned");
        let id = indices.by_username.get(username)?;
        indices.by_id.get(id).cloned()
    }

    fn find_by_email(&self, email: &Email) -> Option<User> {
        let indices = self.indices.read().expect("user store lock poisoned");
        let id = indices.by_email.get(email)?;
        indices.by_id.get(id).cloned()
    }

    fn find_all(&self) -> Vec<User> {
        self.indices
            .read()
            .expect("user store lock poisoned")
            .by_id
            .values()
            .cloned()
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(username: &str, email: &str) -> User {
        User::new(
            UserId::new(),
            Username::new(username).unwrap(),
            Email::new(email).unwrap(),
        )
    }

    #[rstest]
    fn save_and_find_back_through_every_key() {
        let store = InMemoryUserStore::new();
        let stored = user("alice", "alice@example.org");

        store.save(stored.clone()).unwrap();

        assert_eq!(store.find_by_id(stored.id()), Some(stored.clone()));
        assert_eq!(
            store.find_by_username(stored.username()),
            Some(stored.clone())
        );
        assert_eq!(store.find_by_email(stored.email()), Some(stored));
    }

    #[rstest]
    fn save_rejects_username_owned_by_another_id() {
        let store = InMemoryUserStore::new();
        store.save(user("alice", "alice@example.org")).unwrap();
        let intruder = user("alice", "other@example.org");

        let result = store.save(intruder.clone());

        assert_eq!(
            result,
            Err(StoreError::duplicate_username("alice"))
        );
        assert_eq!(store.find_all().len(), 1);
        assert_eq!(store.find_by_id(intruder.id()), None);
    }

    #[rstest]
    fn save_rejects_email_owned_by_another_id() {
        let store = InMemoryUserStore::new();
        store.save(user("alice", "shared@example.org")).unwrap();

        let result = store.save(user("carol", "shared@example.org"));

        assert_eq!(
            result,
            Err(StoreError::duplicate_email("s***@example.org"))
        );
        assert_eq!(store.find_all().len(), 1);
    }

    #[rstest]
    fn resaving_unchanged_user_is_a_noop() {
        let store = InMemoryUserStore::new();
        let stored = user("alice", "alice@example.org");
        store.save(stored.clone()).unwrap();

        store.save(stored.clone()).unwrap();

        assert_eq!(store.find_all().len(), 1);
        assert_eq!(store.find_by_id(stored.id()), Some(stored));
    }

    #[rstest]
    fn changing_username_drops_the_old_index_entry() {
        let store = InMemoryUserStore::new();
        let original = user("alice", "alice@example.org");
        store.save(original.clone()).unwrap();
        let renamed = original
            .clone()
            .change_username(Username::new("carol").unwrap())
            .unwrap();

        store.save(renamed.clone()).unwrap();

        let old_username = Username::new("alice").unwrap();
        assert_eq!(store.find_by_username(&old_username), None);
        assert_eq!(store.find_by_username(renamed.username()), Some(renamed));
        // The freed username is available to a new user again.
        assert!(store.save(user("alice", "new@example.org")).is_ok());
    }

    #[rstest]
    fn remove_clears_every_index() {
        let store = InMemoryUserStore::new();
        let stored = user("alice", "alice@example.org");
        store.save(stored.clone()).unwrap();

        store.remove(&stored);

        assert_eq!(store.find_by_id(stored.id()), None);
        assert_eq!(store.find_by_username(stored.username()), None);
        assert_eq!(store.find_by_email(stored.email()), None);
        assert!(!store.exists_by_username(stored.username()));
        assert!(!store.exists_by_email(stored.email()));
    }

    #[rstest]
    fn remove_twice_is_a_noop() {
        let store = InMemoryUserStore::new();
        let stored = user("alice", "alice@example.org");
        store.save(stored.clone()).unwrap();

        store.remove(&stored);
        store.remove(&stored);

        assert!(store.find_all().is_empty());
    }

    #[rstest]
    fn removed_keys_become_available_again() {
        let store = InMemoryUserStore::new();
        let stored = user("alice", "alice@example.org");
        store.save(stored.clone()).unwrap();
        store.remove(&stored);

        let replacement = user("alice", "alice@example.org");
        assert!(store.save(replacement).is_ok());
    }

    #[rstest]
    fn find_all_returns_detached_snapshot() {
        let store = InMemoryUserStore::new();
        store.save(user("alice", "alice@example.org")).unwrap();

        let mut snapshot = store.find_all();
        snapshot.clear();

        assert_eq!(store.find_all().len(), 1);
    }

    #[rstest]
    fn clones_share_storage() {
        let store = InMemoryUserStore::new();
        let handle = store.clone();
        let stored = user("alice", "alice@example.org");

        store.save(stored.clone()).unwrap();

        assert_eq!(handle.find_by_id(stored.id()), Some(stored));
    }
}
