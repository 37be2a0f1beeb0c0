//! In-memory implementation of the [`ProjectStore`] port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use organizer_domain::project::{Project, ProjectId};
use organizer_workflow::ports::ProjectStore;

// =============================================================================
// InMemoryProjectStore
// =============================================================================

/// In-memory project store keyed by identity. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn save(&self, project: Project) {
        tracing::debug!("saving project {}", project.id());
        self.projects
            .write()
            .expect("project store lock poisoned")
            .insert(*project.id(), project);
    }

    fn remove(&self, project: &Project) {
        if self
            .projects
            .write()
            .expect("project store lock poisoned")
            .remove(project.id())
            .is_some()
        {
            tracing::debug!("removed project {}", project.id());
        }
    }

    fn find_by_id(&self, id: &ProjectId) -> Option<Project> {
        self.projects
            .read()
            .expect("project store lock poisoned")
            .get(id)
            .cloned()
    }

    fn find_all(&self) -> Vec<Project> {
        self.projects
            .read()
            .expect("project store lock poisoned")
            .values()
            .cloned()
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
