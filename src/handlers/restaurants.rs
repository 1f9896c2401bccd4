//! Restaurant handlers: list, read with nested menu, delete.

use crate::error::AppError;
use crate::models::{Restaurant, RestaurantDetail};
use crate::response::{no_content, ok, ErrorResponse};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

/// Non-numeric ids name no restaurant.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::restaurant_not_found())
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants, own fields only", body = [Restaurant]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::list(&state.pool).await?;
    Ok(ok(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its menu items", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let detail = RestaurantService::detail(&state.pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)?;
    Ok(ok(detail))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its menu items deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !RestaurantService::delete(&state.pool, id).await? {
        return Err(AppError::restaurant_not_found());
    }
    Ok(no_content())
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}/pizzas",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Distinct pizzas on the restaurant's menu", body = [crate::models::Pizza]),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurant_pizzas(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let pizzas = RestaurantService::pizzas_of(&state.pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)?;
    Ok(ok(pizzas))
}
