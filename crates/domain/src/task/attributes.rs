//! Task priority and status enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// TaskPriority
// =============================================================================

/// Priority of a task.
///
/// Tasks constructed without an explicit priority default to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Returns the wire name of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    /// Parses the exact wire names `LOW`, `MEDIUM`, and `HIGH`.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ValidationError::invalid_format(
                "task_priority",
                "LOW, MEDIUM, or HIGH",
            )),
        }
    }
}

// =============================================================================
// TaskStatus
// =============================================================================

/// Workflow status of a task.
///
/// Tasks constructed without an explicit status default to `Todo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Returns true when the task has been completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    /// Parses the exact wire names `TODO`, `IN_PROGRESS`, and `DONE`.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ValidationError::invalid_format(
                "task_status",
                "TODO, IN_PROGRESS, or DONE",
            )),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
