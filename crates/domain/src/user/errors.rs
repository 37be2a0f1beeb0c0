//! Error types for the user domain.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// UserError
// =============================================================================

/// Error types for user aggregate operations.
///
/// Changing a user's username or email to the value it already holds is a
/// usage error; these variants report it. The carried strings are the
/// canonical (for usernames) or masked (for emails) display forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserError {
    /// The new username equals the current one.
    UnchangedUsername {
        /// Canonical form of the rejected username.
        username: String,
    },
    /// The new email equals the current one.
    UnchangedEmail {
        /// Masked form of the rejected email.
        email: String,
    },
}

impl UserError {
    /// Creates an `UnchangedUsername` error.
    #[must_use]
    pub fn unchanged_username(username: impl Into<String>) -> Self {
        Self::UnchangedUsername {
            username: username.into(),
        }
    }

    /// Creates an `UnchangedEmail` error.
    #[must_use]
    pub fn unchanged_email(email: impl Into<String>) -> Self {
        Self::UnchangedEmail {
            email: email.into(),
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::UnchangedUsername { username } => {
                format!("'{}' is already the current username", username)
            }
            Self::UnchangedEmail { email } => {
                format!("'{}' is already the current email", email)
            }
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for UserError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unchanged_username_message() {
        let error = UserError::unchanged_username("alice");
        assert_eq!(error.message(), "'alice' is already the current username");
    }

    #[rstest]
    fn unchanged_email_message() {
        let error = UserError::unchanged_email("a***@example.org");
        assert_eq!(
            error.message(),
            "'a***@example.org' is already the current email"
        );
    }

    #[rstest]
    fn display_matches_message() {
        let error = UserError::unchanged_username("carol");
        assert_eq!(format!("{}", error), error.message());
    }
}
