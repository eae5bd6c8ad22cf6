use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a user (hard delete)
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/users/{user_id}")]
pub async fn delete_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(user_id) = path.into_inner().parse::<UserId>() else {
        return ApiResponse::not_found("USER_NOT_FOUND", "User not found");
    };

    match data.users.delete.execute(user_id).await {
        Ok(()) => ApiResponse::message("User deleted successfully"),
        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id = %user_id, error = %msg, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
