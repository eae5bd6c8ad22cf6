use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{
    validate_email, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::incoming::use_cases::{
    UpdateUserError, UpdateUserUseCase,
};
use crate::modules::users::application::ports::outgoing::UserRepository;

pub struct UpdateUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: UserId, changes: UserChanges) -> Result<User, UpdateUserError> {
        let changes = changes.without_empty_values();
        if changes.is_empty() {
            return Err(UpdateUserError::EmptyUpdate);
        }

        if let Some(email) = changes.email.as_deref() {
            validate_email(email).map_err(|e| UpdateUserError::InvalidEmail(e.0))?;
        }

        self.repository
            .update(id, changes)
            .await
            .map_err(UpdateUserError::from)
    }
}
