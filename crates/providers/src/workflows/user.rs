use organizer_domain::user::UserId;
use organizer_workflow::ports::{IdGenerator, UserStore};
use organizer_workflow::workflows::user::{
    CreateUserCommand, CreateUserResult, CreateUserService, DeleteUserCommand, DeleteUserResult,
    DeleteUserService, ReadUserCommand, ReadUserResult, ReadUserService, UpdateUserCommand,
    UpdateUserResult, UpdateUserService,
};

// =============================================================================
// UserProvider
// =============================================================================

/// Bundles the user use cases behind one explicitly constructed value.
///
/// Every service receives a clone of the same store handle, so they all
/// observe the same storage.
pub struct UserProvider<S, G>
where
    S: UserStore,
    G: IdGenerator<Id = UserId>,
{
    create_user: CreateUserService<S, G>,
    read_user: ReadUserService<S>,
    update_user: UpdateUserService<S>,
    delete_user: DeleteUserService<S>,
}

impl<S, G> UserProvider<S, G>
where
    S: UserStore,
    G: IdGenerator<Id = UserId>,
{
    #[must_use]
    pub fn new(user_store: S, id_generator: G) -> Self {
        Self {
            create_user: CreateUserService::new(user_store.clone(), id_generator),
            read_user: ReadUserService::new(user_store.clone()),
            update_user: UpdateUserService::new(user_store.clone()),
            delete_user: DeleteUserService::new(user_store),
        }
    }

    pub fn create(&self, command: &CreateUserCommand) -> CreateUserResult {
        self.create_user.handle(command)
    }

    pub fn read(&self, command: &ReadUserCommand) -> ReadUserResult {
        self.read_user.handle(command)
    }

    pub fn update(&self, command: &UpdateUserCommand) -> UpdateUserResult {
        self.update_user.handle(command)
    }

    pub fn delete(&self, command: &DeleteUserCommand) -> DeleteUserResult {
        self.delete_user.handle(command)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::adapters::{InMemoryUserStore, UuidUserIdGenerator};

    fn provider() -> UserProvider<InMemoryUserStore, UuidUserIdGenerator> {
        UserProvider::new(InMemoryUserStore::new(), UuidUserIdGenerator::new())
    }

    #[rstest]
    fn services_share_one_store() {
        let provider = provider();

        let id = provider
            .create(&CreateUserCommand::new(
                Some("alice".to_string()),
                Some("alice@example.org".to_string()),
            ))
            .unwrap();

        let deleted = provider.delete(&DeleteUserCommand::new(Some(id.to_string())));
        assert_eq!(deleted, Ok(id));
    }
}
