use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::users::application::domain::entities::{NewUser, User};
use crate::modules::users::application::ports::incoming::use_cases::CreateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub image_data: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.username,
            email: req.email,
            name: req.name,
            phone: req.phone,
            image_data: req.image_data,
        }
    }
}

fn map_create_user_error(err: CreateUserError, username: &str) -> HttpResponse {
    match &err {
        CreateUserError::InvalidEmail(_) => {
            ApiResponse::unprocessable("VALIDATION_ERROR", &err.to_string())
        }

        CreateUserError::Conflict(field) => {
            warn!(username = %username, field = %field, "Duplicate user on create");
            ApiResponse::bad_request("DUPLICATE_VALUE", &err.to_string())
        }

        CreateUserError::RepositoryError(msg) => {
            error!(username = %username, error = %msg, "Unhandled user creation error");
            ApiResponse::internal_error()
        }
    }
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Duplicate username or email", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/users")]
pub async fn create_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone();

    match data.users.create.execute(req.into()).await {
        Ok(user) => ApiResponse::created("User created successfully", user),
        Err(err) => map_create_user_error(err, &username),
    }
}
