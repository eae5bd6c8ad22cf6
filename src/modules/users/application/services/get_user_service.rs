use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{User, UserId};
use crate::modules::users::application::ports::incoming::use_cases::{
    GetUserError, GetUserUseCase,
};
use crate::modules::users::application::ports::outgoing::UserRepository;

pub struct GetUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> GetUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserUseCase for GetUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<Option<User>, GetUserError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(GetUserError::from)
    }
}
