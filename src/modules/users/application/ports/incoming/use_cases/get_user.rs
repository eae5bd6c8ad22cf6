use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{User, UserId};
use crate::modules::users::application::ports::outgoing::UserRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for GetUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DatabaseError(msg) => GetUserError::RepositoryError(msg),
            other => GetUserError::RepositoryError(other.to_string()),
        }
    }
}

/// Point lookup. A missing user is `Ok(None)`, not an error.
#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<Option<User>, GetUserError>;
}
