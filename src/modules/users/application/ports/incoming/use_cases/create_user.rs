use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{DuplicateField, NewUser, User};
use crate::modules::users::application::ports::outgoing::UserRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("User with this {0} already exists")]
    Conflict(DuplicateField),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for CreateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::Conflict { field } => CreateUserError::Conflict(field),
            UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
            other => CreateUserError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, user: NewUser) -> Result<User, CreateUserError>;
}
