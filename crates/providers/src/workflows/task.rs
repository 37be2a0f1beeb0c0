use organizer_domain::task::TaskId;
use organizer_workflow::ports::{IdGenerator, TaskStore, UserStore};
use organizer_workflow::workflows::task::{
    CreateTaskCommand, CreateTaskResult, CreateTaskService, DeleteTaskCommand, DeleteTaskResult,
    DeleteTaskService, ReadTaskCommand, ReadTaskResult, ReadTaskService, UpdateTaskCommand,
    UpdateTaskResult, UpdateTaskService,
};

// =============================================================================
// TaskProvider
// =============================================================================

/// Bundles the task use cases behind one explicitly constructed value.
///
/// Task creation and update resolve assignees against the user store,
/// so the provider takes both store handles.
pub struct TaskProvider<T, U, G>
where
    T: TaskStore,
    U: UserStore,
    G: IdGenerator<Id = TaskId>,
{
    create_task: CreateTaskService<T, U, G>,
    read_task: ReadTaskService<T>,
    update_task: UpdateTaskService<T, U>,
    delete_task: DeleteTaskService<T>,
}

impl<T, U, G> TaskProvider<T, U, G>
where
    T: TaskStore,
    U: UserStore,
    G: IdGenerator<Id = TaskId>,
{
    #[must_use]
    pub fn new(task_store: T, user_store: U, id_generator: G) -> Self {
        Self {
            create_task: CreateTaskService::new(
                task_store.clone(),
                user_store.clone(),
                id_generator,
            ),
            read_task: ReadTaskService::new(task_store.clone()),
            update_task: UpdateTaskService::new(task_store.clone(), user_store),
            delete_task: DeleteTaskService::new(task_store),
        }
    }

    pub fn create(&self, command: &CreateTaskCommand) -> CreateTaskResult {
        self.create_task.handle(command)
    }

    pub fn read(&self, command: &ReadTaskCommand) -> ReadTaskResult {
        self.read_task.handle(command)
    }

    pub fn update(&self, command: &UpdateTaskCommand) -> UpdateTaskResult {
        self.update_task.handle(command)
    }

    pub fn delete(&self, command: &DeleteTaskCommand) -> DeleteTaskResult {
        self.delete_task.handle(command)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use organizer_workflow::workflows::task::CreateBasicTaskCommand;
    use rstest::rstest;

    use crate::adapters::{InMemoryTaskStore, InMemoryUserStore, UuidTaskIdGenerator};

    #[rstest]
    fn services_share_one_store() {
        let provider = TaskProvider::new(
            InMemoryTaskStore::new(),
            InMemoryUserStore::new(),
            UuidTaskIdGenerator::new(),
        );

        let id = provider
            .create(&CreateTaskCommand::Basic(CreateBasicTaskCommand::new(
                Some("Write report".to_string()),
                Some("Quarterly numbers".to_string()),
            )))
            .unwrap();

        let task = provider
            .read(&ReadTaskCommand::new(Some(id.to_string())))
            .unwrap();
        assert_eq!(task.id(), &id);
    }
}
