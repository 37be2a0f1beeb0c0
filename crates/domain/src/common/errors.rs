//! Error types for the common domain module.
//!
//! This module provides the validation error type used across all value
//! objects in the organizer domain.

use std::error::Error;
use std::fmt;

// =============================================================================
// ValidationError
// =============================================================================

/// Validation error variants for domain value objects.
///
/// This enum represents the ways constructing a value object can fail.
/// Normalization (trimming, case folding) happens before the checks that
/// produce these errors, so the reported `actual` values always refer to
/// the normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value did not match the required pattern.
    InvalidFormat {
        /// The name of the field with invalid format.
        field: String,
        /// Description of the expected format.
        expected: String,
    },
    /// A value's length was outside the allowed bounds.
    LengthOutOfRange {
        /// The name of the field that was out of range.
        field: String,
        /// Minimum allowed length in characters.
        min: usize,
        /// Maximum allowed length in characters.
        max: usize,
        /// The actual length of the normalized input.
        actual: usize,
    },
    /// An identifier was the nil (all-zero) value.
    NilIdentifier {
        /// The name of the identifier field.
        field: String,
    },
}

impl ValidationError {
    /// Creates an invalid format error.
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Creates a length out of range error.
    pub fn length_out_of_range(
        field: impl Into<String>,
        min: usize,
        max: usize,
        actual: usize,
    ) -> Self {
        Self::LengthOutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a nil identifier error.
    pub fn nil_identifier(field: impl Into<String>) -> Self {
        Self::NilIdentifier {
            field: field.into(),
        }
    }

    /// Returns the name of the field that caused the error.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidFormat { field, .. }
            | Self::LengthOutOfRange { field, .. }
            | Self::NilIdentifier { field } => field,
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidFormat { field, expected } => {
                format!("'{}' has invalid format: expected {}", field, expected)
            }
            Self::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                format!(
                    "'{}' must be between {} and {} characters, but was {}",
                    field, min, max, actual
                )
            }
            Self::NilIdentifier { field } => {
                format!("'{}' must not be the nil identifier", field)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for ValidationError {}

// =============================================================================
// Tests
// =============================================================================
