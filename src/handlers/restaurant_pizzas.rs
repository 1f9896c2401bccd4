//! Menu item creation. Every failure answers the same generic 400.

use crate::error::AppError;
use crate::extractors::MenuItemPayload;
use crate::models::{CreatedMenuItem, MenuItemRequest};
use crate::response::{created, ValidationErrorResponse};
use crate::service::MenuItemService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body(
        content = MenuItemRequest,
        description = "camelCase and PascalCase spellings of each field are also accepted",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Menu item created", body = CreatedMenuItem),
        (status = 400, description = "Missing, malformed, out-of-range or dangling input", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    MenuItemPayload(input): MenuItemPayload,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::create(&state.pool, input)
        .await
        .map_err(AppError::into_validation)?;
    Ok(created(item))
}
