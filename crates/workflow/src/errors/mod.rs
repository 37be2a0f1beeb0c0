//! Error types for the store boundary.
//!
//! The user store rejects writes that would break its uniqueness
//! invariants; [`StoreError`] is how that rejection crosses the port.
//! Use cases run their own existence checks first, so in a
//! single-caller model these errors act as the store's last line of
//! defense and are translated back into the matching use-case variant.

use std::error::Error;
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Uniqueness violations reported by a store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another stored user already owns the username.
    DuplicateUsername {
        /// Canonical form of the contested username.
        username: String,
    },
    /// Another stored user already owns the email address.
    DuplicateEmail {
        /// Masked form of the contested email.
        email: String,
    },
}

impl StoreError {
    /// Creates a `DuplicateUsername` error.
    #[must_use]
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }

    /// Creates a `DuplicateEmail` error.
    #[must_use]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Returns true if this is a duplicate username error.
    #[must_use]
    pub const fn is_duplicate_username(&self) -> bool {
        matches!(self, Self::DuplicateUsername { .. })
    }

    /// Returns true if this is a duplicate email error.
    #[must_use]
    pub const fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateUsername { username } => {
                format!("username '{}' already exists", username)
            }
            Self::DuplicateEmail { email } => {
                format!("email '{}' already exists", email)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for StoreError {}

// =============================================================================
// Tests
// =============================================================================
