//! In-memory implementation of the [`TaskStore`] port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use organizer_domain::task::{Task, TaskId};
use organizer_workflow::ports::TaskStore;

// =============================================================================
// InMemoryTaskStore
// =============================================================================

/// In-memory task store keyed by identity. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn save(&self, task: Task) {
        tracing::debug!("saving task {}", task.id());
        self.tasks
            .write()
            .expect("task store lock poisoned")
            .insert(*task.id(), task);
    }

    fn remove(&self, task: &Task) {
        if self
            .tasks
            .write()
            .expect("task store lock poisoned")
            .remove(task.id())
            .is_some()
        {
            tracing::debug!("removed task {}", task.id());
        }
    }

    fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.tasks
            .read()
            .expect("task store lock poisoned")
            .get(id)
            .cloned()
    }

    fn find_all(&self) -> Vec<Task> {
        self.tasks
            .read()
            .expect("task store lock poisoned")
            .values()
            .cloned()
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
