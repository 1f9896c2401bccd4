use crate::error::AppError;
use crate::models::Pizza;
use crate::response::{ok, ErrorResponse};
use crate::service::PizzaService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas, own fields only", body = [Pizza]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = PizzaService::list(&state.pool).await?;
    Ok(ok(pizzas))
}
