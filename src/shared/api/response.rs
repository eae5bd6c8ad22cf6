// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform envelope: `{status, message, data?, code?}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok_with(status: StatusCode, message: &str, data: Option<T>) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            status: ResponseStatus::Success,
            message: message.to_string(),
            data,
            code: None,
        })
    }

    pub fn success(message: &str, data: T) -> HttpResponse {
        Self::ok_with(StatusCode::OK, message, Some(data))
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        Self::ok_with(StatusCode::CREATED, message, Some(data))
    }
}

impl ApiResponse<()> {
    /// 200 with a message and no `data`.
    pub fn message(message: &str) -> HttpResponse {
        Self::ok_with(StatusCode::OK, message, None)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            status: ResponseStatus::Error,
            message: message.to_string(),
            data: None,
            code: Some(code.to_string()),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unprocessable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "An unexpected error occurred",
        )
    }
}
