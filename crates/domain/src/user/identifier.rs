//! User identifier value objects.
//!
//! This module provides the validated value types for the User aggregate:
//!
//! - **UserId**: UUID-based unique user identifier
//! - **Username**: normalized login name
//! - **Email**: normalized email address with a masked display form

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::common::ValidationError;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{4,10}$").expect("valid username regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("valid email regex")
});

// =============================================================================
// UserId
// =============================================================================

/// Unique identifier for a user.
///
/// `UserId` wraps a UUID to provide type safety and prevent accidental
/// mixing with the other UUID-based identifiers in the domain. The nil
/// (all-zero) UUID is never a valid `UserId`.
///
/// # Examples
///
/// ```
/// use organizer_domain::user::UserId;
///
/// let id = UserId::new();
/// let parsed: UserId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `UserId` from an existing UUID.
    ///
    /// Returns an error for the nil UUID.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, ValidationError> {
        if uuid.is_nil() {
            return Err(ValidationError::nil_identifier("user_id"));
        }
        Ok(Self(uuid))
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(string.trim())
            .map_err(|_| ValidationError::invalid_format("user_id", "UUID format"))?;
        Self::from_uuid(uuid)
    }
}

// =============================================================================
// Username
// =============================================================================

/// Login name with normalization and format constraints.
///
/// The raw input is trimmed and lower-cased before validation; the
/// normalized form must consist of 4 to 10 ASCII letters. The normalized
/// form is the canonical value used for equality, hashing, and storage.
///
/// # Examples
///
/// ```
/// use organizer_domain::user::Username;
///
/// let name = Username::new("  Alice  ").unwrap();
/// assert_eq!(name.value(), "alice");
///
/// assert!(Username::new("abc").is_err());
/// assert!(Username::new("user1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Minimum length for a username.
    pub const MIN_LENGTH: usize = 4;
    /// Maximum length for a username.
    pub const MAX_LENGTH: usize = 10;

    /// Creates a new `Username` from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let normalized = value.into().trim().to_lowercase();

        if !USERNAME_RE.is_match(&normalized) {
            return Err(ValidationError::invalid_format(
                "username",
                "4 to 10 lowercase letters",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the canonical username as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Email
// =============================================================================

/// Email address normalized to a canonical lower-cased form.
///
/// Equality, hashing, and storage use the full canonical address; the
/// `Display` form masks the local part down to its first character
/// (`a***@example.org`) so addresses do not leak into logs verbatim.
///
/// # Examples
///
/// ```
/// use organizer_domain::user::Email;
///
/// let email = Email::new(" Alice@Example.ORG ").unwrap();
/// assert_eq!(email.as_str(), "alice@example.org");
/// assert_eq!(email.to_string(), "a***@example.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email` from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let normalized = value.into().trim().to_lowercase();

        if !EMAIL_RE.is_match(&normalized) {
            return Err(ValidationError::invalid_format(
                "email",
                "local@domain.tld",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the canonical address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.chars().next(), self.0.find('@')) {
            (Some(first), Some(at)) => write!(formatter, "{}***{}", first, &self.0[at..]),
            _ => formatter.write_str(&self.0),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
