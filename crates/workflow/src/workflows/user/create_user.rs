use std::error::Error;
use std::fmt;

use organizer_domain::user::{Email, User, UserId, Username};

use super::CreateUserCommand;
use crate::errors::StoreError;
use crate::ports::{IdGenerator, UserStore};

// =============================================================================
// CreateUserResult
// =============================================================================

pub type CreateUserResult = Result<UserId, CreateUserError>;

/// Closed error set for the create-user use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserError {
    MissingUsername,
    InvalidUsernameFormat,
    UsernameAlreadyExists,
    MissingEmail,
    InvalidEmailFormat,
    EmailAlreadyExists,
}

impl CreateUserError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingUsername => "username is missing",
            Self::InvalidUsernameFormat => "username has an invalid format",
            Self::UsernameAlreadyExists => "username already exists",
            Self::MissingEmail => "email is missing",
            Self::InvalidEmailFormat => "email has an invalid format",
            Self::EmailAlreadyExists => "email already exists",
        }
    }
}

impl fmt::Display for CreateUserError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for CreateUserError {}

// =============================================================================
// CreateUserService
// =============================================================================

/// Creates a user from raw username and email input.
///
/// Validation order: username (missing, format), email (missing,
/// format), then uniqueness of each against the store. Nothing is
/// written before every check has passed.
pub struct CreateUserService<S, G> {
    user_store: S,
    id_generator: G,
}

impl<S, G> CreateUserService<S, G>
where
    S: UserStore,
    G: IdGenerator<Id = UserId>,
{
    #[must_use]
    pub const fn new(user_store: S, id_generator: G) -> Self {
        Self {
            user_store,
            id_generator,
        }
    }

    pub fn handle(&self, command: &CreateUserCommand) -> CreateUserResult {
        let Some(raw_username) = command.username() else {
            return Err(CreateUserError::MissingUsername);
        };
        let username =
            Username::new(raw_username).map_err(|_| CreateUserError::InvalidUsernameFormat)?;

        let Some(raw_email) = command.email() else {
            return Err(CreateUserError::MissingEmail);
        };
        let email = Email::new(raw_email).map_err(|_| CreateUserError::InvalidEmailFormat)?;

        if self.user_store.exists_by_username(&username) {
            return Err(CreateUserError::UsernameAlreadyExists);
        }
        if self.user_store.exists_by_email(&email) {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let user_id = self.id_generator.generate();
        let user = User::new(user_id, username, email);

        match self.user_store.save(user) {
            Ok(()) => Ok(user_id),
            Err(StoreError::DuplicateUsername { .. }) => Err(CreateUserError::UsernameAlreadyExists),
            Err(StoreError::DuplicateEmail { .. }) => Err(CreateUserError::EmailAlreadyExists),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::ports::testing::{FixedUserIdGenerator, MockUserStore};

    fn service(store: &MockUserStore, id: UserId) -> CreateUserService<MockUserStore, FixedUserIdGenerator> {
        CreateUserService::new(store.clone(), FixedUserIdGenerator::new(id))
    }

    fn command(username: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand::new(Some(username.to_string()), Some(email.to_string()))
    }

    #[rstest]
    fn creates_user_and_returns_generated_id() {
        let store = MockUserStore::new();
        let id = UserId::new();

        let result = service(&store, id).handle(&command("Alice", "Alice@Example.org"));

        assert_eq!(result, Ok(id));
        let stored = store.find_by_id(&id).unwrap();
        assert_eq!(stored.username().value(), "alice");
        assert_eq!(stored.email().as_str(), "alice@example.org");
    }

    #[rstest]
    fn missing_username() {
        let store = MockUserStore::new();
        let command = CreateUserCommand::new(None, Some("alice@example.org".to_string()));

        let result = service(&store, UserId::new()).handle(&command);

        assert_eq!(result, Err(CreateUserError::MissingUsername));
    }

    #[rstest]
    fn missing_email() {
        let store = MockUserStore::new();
        let command = CreateUserCommand::new(Some("alice".to_string()), None);

        let result = service(&store, UserId::new()).handle(&command);

        assert_eq!(result, Err(CreateUserError::MissingEmail));
    }

    #[rstest]
    fn invalid_username_reported_before_missing_email() {
        let store = MockUserStore::new();
        let command = CreateUserCommand::new(Some("a!".to_string()), None);

        let result = service(&store, UserId::new()).handle(&command);

        assert_eq!(result, Err(CreateUserError::InvalidUsernameFormat));
    }

    #[rstest]
    fn invalid_email_format() {
        let store = MockUserStore::new();

        let result = service(&store, UserId::new()).handle(&command("alice", "not-an-email"));

        assert_eq!(result, Err(CreateUserError::InvalidEmailFormat));
        assert_eq!(store.user_count(), 0);
    }

    #[rstest]
    fn duplicate_username_leaves_store_unchanged() {
        let store = MockUserStore::new();
        let first = service(&store, UserId::new()).handle(&command("validuser", "example@org.com"));
        assert!(first.is_ok());

        let second = service(&store, UserId::new()).handle(&command("validuser", "other@org.com"));

        assert_eq!(second, Err(CreateUserError::UsernameAlreadyExists));
        assert_eq!(store.user_count(), 1);
    }

    #[rstest]
    fn duplicate_email_leaves_store_unchanged() {
        let store = MockUserStore::new();
        service(&store, UserId::new())
            .handle(&command("alice", "shared@example.org"))
            .unwrap();

        let result = service(&store, UserId::new()).handle(&command("carol", "shared@example.org"));

        assert_eq!(result, Err(CreateUserError::EmailAlreadyExists));
        assert_eq!(store.user_count(), 1);
    }

    #[rstest]
    fn uniqueness_compares_canonical_forms() {
        let store = MockUserStore::new();
        service(&store, UserId::new())
            .handle(&command("alice", "alice@example.org"))
            .unwrap();

        let result = service(&store, UserId::new()).handle(&command(" ALICE ", "new@example.org"));

        assert_eq!(result, Err(CreateUserError::UsernameAlreadyExists));
    }
}
