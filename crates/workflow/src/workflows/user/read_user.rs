use std::error::Error;
use std::fmt;

use organizer_domain::user::{Email, User, UserId, Username};

use super::{ReadUserCommand, ReadUserForLoginCommand};
use crate::ports::UserStore;

// =============================================================================
// ReadUserResult
// =============================================================================

pub type ReadUserResult = Result<User, ReadUserError>;

/// Closed error set for the read-user use case, covering both the by-id
/// lookup and the compound login lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadUserError {
    MissingUserId,
    InvalidUserIdFormat,
    UserNotFound,
    NoProvidedParameters,
    MissingUsername,
    InvalidUsernameFormat,
    UsernameNotFound,
    MissingEmail,
    InvalidEmailFormat,
    EmailNotFound,
    Mismatch,
}

impl ReadUserError {
    /// Returns a human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingUserId => "user id is missing",
            Self::InvalidUserIdFormat => "user id has an invalid format",
            Self::UserNotFound => "user not found",
            Self::NoProvidedParameters => "no parameters provided",
            Self::MissingUsername => "username is missing",
            Self::InvalidUsernameFormat => "username has an invalid format",
            Self::UsernameNotFound => "username not found",
            Self::MissingEmail => "email is missing",
            Self::InvalidEmailFormat => "email has an invalid format",
            Self::EmailNotFound => "email not found",
            Self::Mismatch => "username and email belong to different users",
        }
    }
}

impl fmt::Display for ReadUserError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for ReadUserError {}

// =============================================================================
// ReadUserService
// =============================================================================

/// Looks up a user by id, or by the compound username+email login check.
///
/// The login variant resolves both keys independently; when they resolve
/// to two different stored users the lookup fails with `Mismatch`.
pub struct ReadUserService<S> {
    user_store: S,
}

impl<S: UserStore> ReadUserService<S> {
    #[must_use]
    pub const fn new(user_store: S) -> Self {
        Self { user_store }
    }

    pub fn handle(&self, command: &ReadUserCommand) -> ReadUserResult {
        match command {
            ReadUserCommand::ById(by_id) => self.read_by_id(by_id.id()),
            ReadUserCommand::ForLogin(login) => self.read_for_login(login),
        }
    }

    fn read_by_id(&self, id: Option<&str>) -> ReadUserResult {
        let Some(raw_id) = id else {
            return Err(ReadUserError::MissingUserId);
        };
        let user_id: UserId = raw_id
            .parse()
            .map_err(|_| ReadUserError::InvalidUserIdFormat)?;

        self.user_store
            .find_by_id(&user_id)
            .ok_or(ReadUserError::UserNotFound)
    }

    fn read_for_login(&self, command: &ReadUserForLoginCommand) -> ReadUserResult {
        let (raw_username, raw_email) = match (command.username(), command.email()) {
            (None, None) => return Err(ReadUserError::NoProvidedParameters),
            (None, Some(_)) => return Err(ReadUserError::MissingUsername),
            (Some(_), None) => return Err(ReadUserError::MissingEmail),
            (Some(username), Some(email)) => (username, email),
        };

        let username =
            Username::new(raw_username).map_err(|_| ReadUserError::InvalidUsernameFormat)?;
        let email = Email::new(raw_email).map_err(|_| ReadUserError::InvalidEmailFormat)?;

        let by_username = self
            .user_store
            .find_by_username(&username)
            .ok_or(ReadUserError::UsernameNotFound)?;
        let by_email = self
            .user_store
            .find_by_email(&email)
            .ok_or(ReadUserError::EmailNotFound)?;

        if by_username.id() == by_email.id() {
            Ok(by_username)
        } else {
            Err(ReadUserError::Mismatch)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
