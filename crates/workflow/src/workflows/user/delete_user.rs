use std::error::Error;
use std::fmt;

use organizer_domain::user::UserId;

use super::DeleteUserCommand;
use crate::ports::UserStore;

// =============================================================================
// DeleteUserResult
// =============================================================================

pub type DeleteUserResult = Result<UserId, DeleteUserError>;

/// Closed error set for the delete-user use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteUserError {
    MissingUserId,
    InvalidUserIdFormat,
    UserNotFound,
}

impl DeleteUserError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingUserId => "user id is missing",
            Self::InvalidUserIdFormat => "user id has an invalid format",
            Self::UserNotFound => "user not found",
        }
    }
}

impl fmt::Display for DeleteUserError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for DeleteUserError {}

// =============================================================================
// DeleteUserService
// =============================================================================

/// Deletes a stored user by id.
///
/// Tasks referencing the user as assignee are left untouched; the
/// reference is a weak by-id lookup that simply stops resolving.
pub struct DeleteUserService<S> {
    user_store: S,
}

impl<S: UserStore> DeleteUserService<S> {
    #[must_use]
    pub const fn new(user_store: S) -> Self {
        Self { user_store }
    }

    pub fn handle(&self, command: &DeleteUserCommand) -> DeleteUserResult {
        let Some(raw_id) = command.id() else {
            return Err(DeleteUserError::MissingUserId);
        };
        let user_id: UserId = raw_id
            .parse()
            .map_err(|_| DeleteUserError::InvalidUserIdFormat)?;

        let Some(user) = self.user_store.find_by_id(&user_id) else {
            return Err(DeleteUserError::UserNotFound);
        };

        self.user_store.remove(&user);
        Ok(user_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
