// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ResponseStatus;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always `success`
    #[schema(example = "success")]
    pub status: ResponseStatus,
    #[schema(example = "User retrieved successfully")]
    pub message: String,
    /// Response data
    pub data: T,
}

/// Success response that carries no data
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub status: ResponseStatus,
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `error`
    #[schema(example = "error")]
    pub status: ResponseStatus,
    /// Human-readable error message
    #[schema(example = "User not found")]
    pub message: String,
    /// Error code for programmatic handling
    #[schema(example = "USER_NOT_FOUND")]
    pub code: String,
}
