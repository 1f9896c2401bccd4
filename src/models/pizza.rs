use serde::Serialize;
use utoipa::ToSchema;

/// Table `pizzas`. Reference data; no create, update or delete route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free-text, comma separated.
    pub ingredients: String,
}
