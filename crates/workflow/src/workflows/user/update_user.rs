use std::error::Error;
use std::fmt;

use organizer_domain::user::{Email, User, UserId, Username};

use super::UpdateUserCommand;
use crate::errors::StoreError;
use crate::ports::UserStore;

// =============================================================================
// UpdateUserResult
// =============================================================================

pub type UpdateUserResult = Result<UserId, UpdateUserError>;

/// Closed error set for the update-user use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateUserError {
    NoFieldsProvided,
    MissingUserId,
    InvalidUserIdFormat,
    UserNotFound,
    InvalidUsernameFormat,
    UsernameAlreadyExists,
    InvalidEmailFormat,
    EmailAlreadyExists,
    NoChanges,
}

impl UpdateUserError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoFieldsProvided => "no fields provided",
            Self::MissingUserId => "user id is missing",
            Self::InvalidUserIdFormat => "user id has an invalid format",
            Self::UserNotFound => "user not found",
            Self::InvalidUsernameFormat => "username has an invalid format",
            Self::UsernameAlreadyExists => "username already exists",
            Self::InvalidEmailFormat => "email has an invalid format",
            Self::EmailAlreadyExists => "email already exists",
            Self::NoChanges => "every provided field equals the stored value",
        }
    }
}

impl fmt::Display for UpdateUserError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for UpdateUserError {}

// =============================================================================
// UpdateUserService
// =============================================================================

/// Field-wise optional update of a stored user.
///
/// A field absent from the command keeps its stored value. When the
/// effective state equals the stored state the update is rejected with
/// `NoChanges`; the user aggregate is the one entity whose no-op
/// mutations are usage errors.
pub struct UpdateUserService<S> {
    user_store: S,
}

impl<S: UserStore> UpdateUserService<S> {
    #[must_use]
    pub const fn new(user_store: S) -> Self {
        Self { user_store }
    }

    pub fn handle(&self, command: &UpdateUserCommand) -> UpdateUserResult {
        if command.username().is_none() && command.email().is_none() {
            return Err(UpdateUserError::NoFieldsProvided);
        }

        let Some(raw_id) = command.user_id() else {
            return Err(UpdateUserError::MissingUserId);
        };
        let user_id: UserId = raw_id
            .parse()
            .map_err(|_| UpdateUserError::InvalidUserIdFormat)?;

        let Some(existing) = self.user_store.find_by_id(&user_id) else {
            return Err(UpdateUserError::UserNotFound);
        };

        let username = match command.username() {
            Some(raw) => {
                Username::new(raw).map_err(|_| UpdateUserError::InvalidUsernameFormat)?
            }
            None => existing.username().clone(),
        };
        let email = match command.email() {
            Some(raw) => Email::new(raw).map_err(|_| UpdateUserError::InvalidEmailFormat)?,
            None => existing.email().clone(),
        };

        if &username == existing.username() && &email == existing.email() {
            return Err(UpdateUserError::NoChanges);
        }

        if &username != existing.username() && self.user_store.exists_by_username(&username) {
            return Err(UpdateUserError::UsernameAlreadyExists);
        }
        if &email != existing.email() && self.user_store.exists_by_email(&email) {
            return Err(UpdateUserError::EmailAlreadyExists);
        }

        let user = User::new(user_id, username, email);
        match self.user_store.save(user) {
            Ok(()) => Ok(user_id),
            Err(StoreError::DuplicateUsername { .. }) => Err(UpdateUserError::UsernameAlreadyExists),
            Err(StoreError::DuplicateEmail { .. }) => Err(UpdateUserError::EmailAlreadyExists),
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

    use crate::ports::testing::MockUserStore;

    fn stored_user(store: &MockUserStore, username: &str, email: &str) -> User {
        let user = User::new(
            UserId::new(),
            Username::new(username).unwrap(),
            Email::new(email).unwrap(),
        );
        store.save(user.clone()).unwrap();
        user
    }

    fn command(
        user_id: Option<String>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> UpdateUserCommand {
        UpdateUserCommand::new(
            user_id,
            username.map(str::to_string),
            email.map(str::to_string),
        )
    }

    #[rstest]
    fn updates_username_and_carries_email_over() {
        let store = MockUserStore::new();
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store.clone());

        let result = service.handle(&command(
            Some(user.id().to_string()),
            Some("carol"),
            None,
        ));

        assert_eq!(result, Ok(*user.id()));
        let updated = store.find_by_id(user.id()).unwrap();
        assert_eq!(updated.username().value(), "carol");
        assert_eq!(updated.email().as_str(), "alice@example.org");
    }

    #[rstest]
    fn updates_email_only() {
        let store = MockUserStore::new();
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store.clone());

        let result = service.handle(&command(
            Some(user.id().to_string()),
            None,
            Some("new@example.org"),
        ));

        assert_eq!(result, Ok(*user.id()));
        let updated = store.find_by_id(user.id()).unwrap();
        assert_eq!(updated.username().value(), "alice");
        assert_eq!(updated.email().as_str(), "new@example.org");
    }

    #[rstest]
    fn no_fields_reported_before_missing_id() {
        let service = UpdateUserService::new(MockUserStore::new());

        let result = service.handle(&command(None, None, None));

        assert_eq!(result, Err(UpdateUserError::NoFieldsProvided));
    }

    #[rstest]
    fn missing_id() {
        let service = UpdateUserService::new(MockUserStore::new());

        let result = service.handle(&command(None, Some("carol"), None));

        assert_eq!(result, Err(UpdateUserError::MissingUserId));
    }

    #[rstest]
    fn invalid_id_format() {
        let service = UpdateUserService::new(MockUserStore::new());

        let result = service.handle(&command(Some("oops".to_string()), Some("carol"), None));

        assert_eq!(result, Err(UpdateUserError::InvalidUserIdFormat));
    }

    #[rstest]
    fn unknown_id() {
        let service = UpdateUserService::new(MockUserStore::new());

        let result = service.handle(&command(
            Some(UserId::new().to_string()),
            Some("carol"),
            None,
        ));

        assert_eq!(result, Err(UpdateUserError::UserNotFound));
    }

    #[rstest]
    fn invalid_username_format() {
        let store = MockUserStore::new();
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store);

        let result = service.handle(&command(Some(user.id().to_string()), Some("x"), None));

        assert_eq!(result, Err(UpdateUserError::InvalidUsernameFormat));
    }

    #[rstest]
    fn same_values_rejected_as_no_changes() {
        let store = MockUserStore::new();
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store);

        let result = service.handle(&command(
            Some(user.id().to_string()),
            Some(" ALICE "),
            Some("alice@example.org"),
        ));

        assert_eq!(result, Err(UpdateUserError::NoChanges));
    }

    #[rstest]
    fn username_owned_by_another_user() {
        let store = MockUserStore::new();
        stored_user(&store, "carol", "carol@example.org");
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store.clone());

        let result = service.handle(&command(Some(user.id().to_string()), Some("carol"), None));

        assert_eq!(result, Err(UpdateUserError::UsernameAlreadyExists));
        // The store still holds the original state.
        assert_eq!(
            store.find_by_id(user.id()).unwrap().username().value(),
            "alice"
        );
    }

    #[rstest]
    fn email_owned_by_another_user() {
        let store = MockUserStore::new();
        stored_user(&store, "carol", "carol@example.org");
        let user = stored_user(&store, "alice", "alice@example.org");
        let service = UpdateUserService::new(store);

        let result = service.handle(&command(
            Some(user.id().to_string()),
            None,
            Some("carol@example.org"),
        ));

        assert_eq!(result, Err(UpdateUserError::EmailAlreadyExists));
    }
}
