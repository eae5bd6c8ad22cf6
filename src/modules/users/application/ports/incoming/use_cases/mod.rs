mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::{CreateUserError, CreateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use update_user::{UpdateUserError, UpdateUserUseCase};
