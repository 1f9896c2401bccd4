//! Entities and the nested views assembled by the handlers.
//!
//! Each entity serializes to its own scalar fields only. Relations are composed
//! explicitly in [`views`] so Restaurant -> RestaurantPizza -> Pizza never expands cyclically.

mod pizza;
mod restaurant;
mod restaurant_pizza;
pub mod views;

pub use pizza::Pizza;
pub use restaurant::Restaurant;
pub use restaurant_pizza::{NewRestaurantPizza, Price, RestaurantPizza};
pub use views::{CreatedMenuItem, MenuItemEntry, MenuItemRequest, RestaurantDetail};
