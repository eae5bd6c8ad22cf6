use async_trait::async_trait;
use tracing::info;

use crate::modules::users::application::domain::entities::{validate_email, NewUser, User};
use crate::modules::users::application::ports::incoming::use_cases::{
    CreateUserError, CreateUserUseCase,
};
use crate::modules::users::application::ports::outgoing::UserRepository;

pub struct CreateUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> CreateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user: NewUser) -> Result<User, CreateUserError> {
        validate_email(&user.email).map_err(|e| CreateUserError::InvalidEmail(e.0))?;

        let created = self.repository.create(user).await?;
        info!(user_id = %created.id, username = %created.username, "User created");

        Ok(created)
    }
}
