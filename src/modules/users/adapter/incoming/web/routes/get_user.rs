use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::users::application::domain::entities::{User, UserId};
use crate::modules::users::application::ports::incoming::use_cases::GetUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch a single user
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User retrieved successfully", body = inline(SuccessResponse<User>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/users/{user_id}")]
pub async fn get_user_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    // An id that is not a UUID can never have been issued.
    let Ok(user_id) = path.into_inner().parse::<UserId>() else {
        return ApiResponse::not_found("USER_NOT_FOUND", "User not found");
    };

    match data.users.get.execute(user_id).await {
        Ok(Some(user)) => ApiResponse::success("User retrieved successfully", user),
        Ok(None) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetUserError::RepositoryError(msg)) => {
            error!(user_id = %user_id, error = %msg, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
