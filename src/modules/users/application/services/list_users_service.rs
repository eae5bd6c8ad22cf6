use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{PageRequest, User};
use crate::modules::users::application::ports::incoming::use_cases::{
    ListUsersError, ListUsersUseCase,
};
use crate::modules::users::application::ports::outgoing::UserRepository;

pub struct ListUsersService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> ListUsersService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListUsersUseCase for ListUsersService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ListUsersError> {
        self.repository
            .list(page)
            .await
            .map_err(ListUsersError::from)
    }
}
