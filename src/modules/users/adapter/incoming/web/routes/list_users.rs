use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::users::application::domain::entities::{PageRequest, User};
use crate::modules::users::application::ports::incoming::use_cases::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Number of users to skip (>= 0)
    #[serde(default = "default_skip")]
    #[param(default = 0)]
    pub skip: i64,

    /// Maximum number of users to return (>= 1)
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

fn default_skip() -> i64 {
    PageRequest::DEFAULT_SKIP
}

fn default_limit() -> i64 {
    PageRequest::DEFAULT_LIMIT
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListData {
    pub users: Vec<User>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List users with skip/limit pagination
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users retrieved successfully", body = inline(SuccessResponse<UserListData>)),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/users")]
pub async fn list_users_handler(
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Rejected here so invalid windows never reach storage.
    let Ok(page) = PageRequest::new(query.skip, query.limit) else {
        return ApiResponse::bad_request("INVALID_PAGINATION", "Invalid pagination parameters");
    };

    match data.users.list.execute(page).await {
        Ok(users) => ApiResponse::success("Users retrieved successfully", UserListData { users }),
        Err(ListUsersError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
