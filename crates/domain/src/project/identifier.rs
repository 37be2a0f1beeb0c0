//! Project identifier value objects.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::common::ValidationError;

// =============================================================================
// ProjectId
// =============================================================================

/// Unique identifier for a project.
///
/// Wraps a UUID; the nil (all-zero) UUID is never a valid `ProjectId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new random `ProjectId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `ProjectId` from an existing UUID.
    ///
    /// Returns an error for the nil UUID.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, ValidationError> {
        if uuid.is_nil() {
            return Err(ValidationError::nil_identifier("project_id"));
        }
        Ok(Self(uuid))
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(string.trim())
            .map_err(|_| ValidationError::invalid_format("project_id", "UUID format"))?;
        Self::from_uuid(uuid)
    }
}

// =============================================================================
// ProjectName
// =============================================================================

/// Project name, trimmed and between 1 and 50 characters.
///
/// Unlike [`crate::task::TaskName`] there is no character restriction;
/// any non-blank content of the right length is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Minimum length for a project name.
    pub const MIN_LENGTH: usize = 1;
    /// Maximum length for a project name.
    pub const MAX_LENGTH: usize = 50;

    /// Creates a new `ProjectName` from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        let length = trimmed.chars().count();

        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "project_name",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH,
                length,
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the project name as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
