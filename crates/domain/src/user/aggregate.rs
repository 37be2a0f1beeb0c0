use crate::user::{Email, UserError, UserId, Username};

// =============================================================================
// User
// =============================================================================

/// User aggregate.
///
/// The identity is fixed at construction; username and email are replaced
/// only through the change operations, which reject a no-op change (new
/// value equal to the current canonical value) as a usage error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, username: Username, email: Email) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Replaces the username.
    ///
    /// Fails when the new username equals the current one.
    pub fn change_username(self, username: Username) -> Result<Self, UserError> {
        if username == self.username {
            return Err(UserError::unchanged_username(username.value()));
        }
        Ok(Self { username, ..self })
    }

    /// Replaces the email address.
    ///
    /// Fails when the new email equals the current one, compared by
    /// canonical value.
    pub fn change_email(self, email: Email) -> Result<Self, UserError> {
        if email == self.email {
            return Err(UserError::unchanged_email(email.to_string()));
        }
        Ok(Self { email, ..self })
    }
}

// =============================================================================
// Tests
// =============================================================================
