use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{PageRequest, User};
use crate::modules::users::application::ports::outgoing::UserRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserRepositoryError> for ListUsersError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DatabaseError(msg) => ListUsersError::QueryFailed(msg),
            other => ListUsersError::QueryFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ListUsersError>;
}
