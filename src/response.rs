//! Response helpers. Resource bodies go out bare (no envelope).

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Generic body for every rejected menu item.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable reason
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always `["validation errors"]`
    pub errors: Vec<String>,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn error_body(message: &str) -> ErrorResponse {
    ErrorResponse {
        error: message.to_string(),
    }
}

pub fn errors_body() -> ValidationErrorResponse {
    ValidationErrorResponse {
        errors: vec![VALIDATION_ERRORS.to_string()],
    }
}
