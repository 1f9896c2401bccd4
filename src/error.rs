//! Typed errors and HTTP mapping.

use crate::response::{error_body, errors_body};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("cannot locate executable directory: {0}")]
    ExecutableDir(#[from] std::io::Error),
}

/// Why a menu item request was rejected. Never sent to the client; the wire body is always generic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request body is not JSON: {0}")]
    NotJson(String),
    #[error("request body is not a JSON object")]
    NotAnObject,
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be an integer")]
    NotAnInteger(&'static str),
    #[error("price must be between {min} and {max}, got {value}")]
    PriceOutOfRange { value: i64, min: i64, max: i64 },
    #[error("restaurant {0} does not exist")]
    UnknownRestaurant(i64),
    #[error("pizza {0} does not exist")]
    UnknownPizza(i64),
    #[error("insert rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn restaurant_not_found() -> Self {
        AppError::NotFound("Restaurant not found".into())
    }

    /// Fold any failure into a validation failure, keeping the cause for the log.
    pub fn into_validation(self) -> Self {
        match self {
            AppError::Validation(_) => self,
            other => AppError::Validation(ValidationError::Rejected(other.to_string())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(error_body(msg))).into_response(),
            AppError::Validation(reason) => {
                tracing::warn!(%reason, "rejected menu item");
                (StatusCode::BAD_REQUEST, Json(errors_body())).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(&e.to_string()))).into_response()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(&e.to_string()))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = AppError::restaurant_not_found().into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn every_validation_failure_maps_to_400() {
        let reasons = [
            ValidationError::NotAnObject,
            ValidationError::Missing("price"),
            ValidationError::NotAnInteger("pizza_id"),
            ValidationError::UnknownPizza(9999),
            ValidationError::Rejected("constraint".into()),
        ];
        for reason in reasons {
            let res = AppError::from(reason).into_response();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn into_validation_hides_store_failures() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut).into_validation();
        assert!(matches!(err, AppError::Validation(ValidationError::Rejected(_))));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn db_error_maps_to_500() {
        let res = AppError::Db(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
