//! Task identifier value objects.
//!
//! - **TaskId**: UUID-based unique task identifier
//! - **TaskName**: short name restricted to a safe character set
//! - **TaskDescription**: free-form text up to 500 characters

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::common::ValidationError;

static TASK_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("valid task name regex"));

// =============================================================================
// TaskId
// =============================================================================

/// Unique identifier for a task.
///
/// Wraps a UUID; the nil (all-zero) UUID is never a valid `TaskId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from an existing UUID.
    ///
    /// Returns an error for the nil UUID.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, ValidationError> {
        if uuid.is_nil() {
            return Err(ValidationError::nil_identifier("task_id"));
        }
        Ok(Self(uuid))
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(string.trim())
            .map_err(|_| ValidationError::invalid_format("task_id", "UUID format"))?;
        Self::from_uuid(uuid)
    }
}

// =============================================================================
// TaskName
// =============================================================================

/// Task name, trimmed, 1 to 50 characters, restricted to letters,
/// digits, underscore, hyphen, and space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    /// Minimum length for a task name.
    pub const MIN_LENGTH: usize = 1;
    /// Maximum length for a task name.
    pub const MAX_LENGTH: usize = 50;

    /// Creates a new `TaskName` from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        let length = trimmed.chars().count();

        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "task_name",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH,
                length,
            ));
        }

        if !TASK_NAME_RE.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                "task_name",
                "letters, digits, underscore, hyphen, and space",
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the task name as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// TaskDescription
// =============================================================================

/// Task description, 1 to 500 characters of arbitrary content.
///
/// Whitespace is significant in descriptions, so the input is not
/// trimmed; newlines are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Minimum length for a task description.
    pub const MIN_LENGTH: usize = 1;
    /// Maximum length for a task description.
    pub const MAX_LENGTH: usize = 500;

    /// Creates a new `TaskDescription` from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let length = value.chars().count();

        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(ValidationError::length_out_of_range(
                "task_description",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH,
                length,
            ));
        }

        Ok(Self(value))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod task_id {
        use super::*;

        #[rstest]
        fn new_creates_unique_identifier() {
            assert_ne!(TaskId::new(), TaskId::new());
        }

        #[rstest]
        fn from_uuid_rejects_nil() {
            assert_eq!(
                TaskId::from_uuid(Uuid::nil()),
                Err(ValidationError::nil_identifier("task_id"))
            );
        }

        #[rstest]
        fn from_str_round_trips() {
            let id = TaskId::new();
            let parsed: TaskId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }

        #[rstest]
        fn from_str_trims_whitespace() {
            let id = TaskId::new();
            let parsed: TaskId = format!("\t{}\n", id).parse().unwrap();
            assert_eq!(parsed, id);
        }

        #[rstest]
        fn from_str_rejects_nil_text() {
            let result = "00000000-0000-0000-0000-000000000000".parse::<TaskId>();
            assert_eq!(result, Err(ValidationError::nil_identifier("task_id")));
        }
    }

    mod task_name {
        use super::*;

        #[rstest]
        #[case("Fix login")]
        #[case("refactor_storage-v2")]
        #[case("A")]
        fn accepts_safe_characters(#[case] raw: &str) {
            assert!(TaskName::new(raw).is_ok());
        }

        #[rstest]
        #[case("deploy!")]
        #[case("fix: login")]
        #[case("naïve plan")]
        fn rejects_other_characters(#[case] raw: &str) {
            assert_eq!(
                TaskName::new(raw),
                Err(ValidationError::invalid_format(
                    "task_name",
                    "letters, digits, underscore, hyphen, and space",
                ))
            );
        }

        #[rstest]
        fn rejects_over_max_length() {
            let result = TaskName::new("x".repeat(51));
            assert_eq!(
                result,
                Err(ValidationError::length_out_of_range("task_name", 1, 50, 51))
            );
        }

        #[rstest]
        fn rejects_blank() {
            assert!(TaskName::new("  ").is_err());
        }

        #[rstest]
        fn trims_whitespace() {
            let name = TaskName::new("  Fix login  ").unwrap();
            assert_eq!(name.value(), "Fix login");
        }
    }

    mod task_description {
        use super::*;

        #[rstest]
        fn accepts_newlines() {
            let description = TaskDescription::new("step one\nstep two").unwrap();
            assert_eq!(description.value(), "step one\nstep two");
        }

        #[rstest]
        fn preserves_surrounding_whitespace() {
            let description = TaskDescription::new("  indented  ").unwrap();
            assert_eq!(description.value(), "  indented  ");
        }

        #[rstest]
        fn rejects_empty() {
            assert_eq!(
                TaskDescription::new(""),
                Err(ValidationError::length_out_of_range(
                    "task_description",
                    1,
                    500,
                    0
                ))
            );
        }

        #[rstest]
        fn accepts_max_length() {
            assert!(TaskDescription::new("d".repeat(500)).is_ok());
        }

        #[rstest]
        fn rejects_over_max_length() {
            assert!(TaskDescription::new("d".repeat(501)).is_err());
        }
    }
}
