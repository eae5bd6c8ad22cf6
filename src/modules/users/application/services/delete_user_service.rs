use async_trait::async_trait;
use tracing::info;

use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase,
};
use crate::modules::users::application::ports::outgoing::UserRepository;

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError> {
        self.repository.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
