use async_trait::async_trait;

use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::outgoing::UserRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for DeleteUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => DeleteUserError::NotFound,
            UserRepositoryError::DatabaseError(msg) => DeleteUserError::RepositoryError(msg),
            other => DeleteUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError>;
}
