use async_trait::async_trait;

use crate::modules::users::application::domain::entities::{
    DuplicateField, NewUser, PageRequest, User, UserChanges, UserId,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User with this {field} already exists")]
    Conflict { field: DuplicateField },

    #[error("User not found")]
    NotFound,

    #[error("Update failed - no changes made")]
    NoChanges,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user under a fresh id and returns the stored record.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Applies a non-empty change set and returns the record as stored
    /// after the write.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, UserRepositoryError>;

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserRepositoryError>;
}
