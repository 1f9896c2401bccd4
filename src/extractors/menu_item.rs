//! Extract a normalized menu item from a JSON request body.

use crate::error::{AppError, ValidationError};
use crate::service::MenuItemInput;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

/// Rejects with the generic 400 when the content type is not JSON, the body does not
/// parse, or the fields cannot be normalized.
#[derive(Clone, Copy, Debug)]
pub struct MenuItemPayload(pub MenuItemInput);

#[async_trait]
impl<S> FromRequest<S> for MenuItemPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::NotJson(rejection.body_text()))?;
        Ok(MenuItemPayload(MenuItemInput::from_body(&body)?))
    }
}
