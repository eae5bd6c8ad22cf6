use std::sync::Arc;

use crate::modules::users::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

/// Facade handed to the user routes. Every operation is an injected use case,
/// so handlers never construct storage access themselves.
#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
}
