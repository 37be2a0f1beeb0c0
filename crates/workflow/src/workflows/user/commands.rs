//! Command types for the user use cases.
//!
//! Commands carry raw, untrusted input. Required textual fields are
//! `Option<String>` so a missing field stays distinguishable from a
//! malformed one; validation happens inside the services.

// =============================================================================
// CreateUserCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    username: Option<String>,
    email: Option<String>,
}

impl CreateUserCommand {
    #[must_use]
    pub const fn new(username: Option<String>, email: Option<String>) -> Self {
        Self { username, email }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

// =============================================================================
// ReadUserCommand
// =============================================================================

/// Read commands: lookup by id, or the compound username+email lookup
/// used by the login check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadUserCommand {
    ById(ReadUserByIdCommand),
    ForLogin(ReadUserForLoginCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadUserByIdCommand {
    id: Option<String>,
}

impl ReadUserByIdCommand {
    #[must_use]
    pub const fn new(id: Option<String>) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadUserForLoginCommand {
    username: Option<String>,
    email: Option<String>,
}

impl ReadUserForLoginCommand {
    #[must_use]
    pub const fn new(username: Option<String>, email: Option<String>) -> Self {
        Self { username, email }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

// =============================================================================
// UpdateUserCommand
// =============================================================================

/// Field-wise optional update: an absent field keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserCommand {
    user_id: Option<String>,
    username: Option<String>,
    email: Option<String>,
}

impl UpdateUserCommand {
    #[must_use]
    pub const fn new(
        user_id: Option<String>,
        username: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            user_id,
            username,
            email,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

// =============================================================================
// DeleteUserCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUserCommand {
    id: Option<String>,
}

impl DeleteUserCommand {
    #[must_use]
    pub const fn new(id: Option<String>) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
