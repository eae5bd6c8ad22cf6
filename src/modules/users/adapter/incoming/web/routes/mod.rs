mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::{create_user_handler, CreateUserRequest};
pub use delete_user::delete_user_handler;
pub use get_user::get_user_handler;
pub use list_users::{list_users_handler, UserListData};
pub use update_user::{update_user_handler, UpdateUserRequest};

// utoipa path structs, referenced from the OpenAPI document
pub use create_user::__path_create_user_handler;
pub use delete_user::__path_delete_user_handler;
pub use get_user::__path_get_user_handler;
pub use list_users::__path_list_users_handler;
pub use update_user::__path_update_user_handler;
