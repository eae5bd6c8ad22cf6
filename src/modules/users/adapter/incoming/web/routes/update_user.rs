use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::users::application::domain::entities::{User, UserChanges, UserId};
use crate::modules::users::application::ports::incoming::use_cases::UpdateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update. Omitted, null and empty values leave the stored field as is.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub image_data: Option<String>,
    pub following_ids: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        UserChanges {
            username: req.username,
            email: req.email,
            name: req.name,
            phone: req.phone,
            image_data: req.image_data,
            following_ids: req.following_ids,
        }
    }
}

fn map_update_user_error(err: UpdateUserError, user_id: UserId) -> HttpResponse {
    match &err {
        UpdateUserError::EmptyUpdate => {
            ApiResponse::bad_request("INVALID_UPDATE_DATA", &err.to_string())
        }
        UpdateUserError::InvalidEmail(_) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &err.to_string())
        }
        UpdateUserError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        UpdateUserError::NoChanges => ApiResponse::bad_request("NO_CHANGES", &err.to_string()),
        UpdateUserError::Conflict(field) => {
            warn!(user_id = %user_id, field = %field, "Duplicate user on update");
            ApiResponse::bad_request("DUPLICATE_VALUE", &err.to_string())
        }
        UpdateUserError::RepositoryError(msg) => {
            error!(user_id = %user_id, error = %msg, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Empty update, no changes made, or duplicate username/email", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/users/{user_id}")]
pub async fn update_user_handler(
    path: web::Path<String>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(user_id) = path.into_inner().parse::<UserId>() else {
        return ApiResponse::not_found("USER_NOT_FOUND", "User not found");
    };

    match data
        .users
        .update
        .execute(user_id, req.into_inner().into())
        .await
    {
        Ok(user) => ApiResponse::success("User updated successfully", user),
        Err(err) => map_update_user_error(err, user_id),
    }
}
