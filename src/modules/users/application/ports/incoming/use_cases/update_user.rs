use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{
    DuplicateField, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::outgoing::UserRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("No valid update data provided")]
    EmptyUpdate,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("User not found")]
    NotFound,

    /// The store reported nothing modified. Also raised when every supplied
    /// value already equals the stored one.
    #[error("Update failed - no changes made")]
    NoChanges,

    #[error("User with this {0} already exists")]
    Conflict(DuplicateField),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::Conflict { field } => UpdateUserError::Conflict(field),
            UserRepositoryError::NotFound => UpdateUserError::NotFound,
            UserRepositoryError::NoChanges => UpdateUserError::NoChanges,
            UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId, changes: UserChanges) -> Result<User, UpdateUserError>;
}
