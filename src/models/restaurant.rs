use serde::Serialize;
use utoipa::ToSchema;

/// Table `restaurants`. Owns its menu items; deleting it deletes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}
