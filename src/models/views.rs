//! Nested response shapes for `GET /restaurants/{id}` and `POST /restaurant_pizzas`.

use super::{Pizza, Restaurant};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItemEntry {
    pub id: i64,
    pub price: i64,
    pub pizza: Pizza,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuItemEntry>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, restaurant_pizzas: Vec<MenuItemEntry>) -> Self {
        RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        }
    }
}

/// Documented request shape; the handler reads the body leniently (see `MenuItemInput`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItemRequest {
    /// 1 to 30 inclusive
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreatedMenuItem {
    pub id: i64,
    pub price: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}
