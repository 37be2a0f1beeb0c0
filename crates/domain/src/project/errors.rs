//! Error types for the project domain.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ProjectError
// =============================================================================

/// Error types for project aggregate operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectError {
    /// The task is already part of the project's task list.
    DuplicateTask {
        /// Identifier of the task that was already present.
        task_identifier: String,
    },
}

impl ProjectError {
    /// Creates a `DuplicateTask` error.
    #[must_use]
    pub fn duplicate_task(task_identifier: impl Into<String>) -> Self {
        Self::DuplicateTask {
            task_identifier: task_identifier.into(),
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateTask { task_identifier } => {
                format!("task '{}' is already in the project", task_identifier)
            }
        }
    }
}

impl fmt::Display for ProjectError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for ProjectError {}
