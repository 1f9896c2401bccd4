//! HTTP handlers, one per route, and the OpenAPI document describing them.

pub mod index;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use index::index;
pub use pizzas::list_pizzas;
pub use restaurant_pizzas::create_restaurant_pizza;
pub use restaurants::{delete_restaurant, get_restaurant, list_restaurant_pizzas, list_restaurants};

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        restaurants::list_restaurant_pizzas,
        pizzas::list_pizzas,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::models::Restaurant,
            crate::models::Pizza,
            crate::models::RestaurantPizza,
            crate::models::RestaurantDetail,
            crate::models::MenuItemEntry,
            crate::models::MenuItemRequest,
            crate::models::CreatedMenuItem,
            crate::response::ErrorResponse,
            crate::response::ValidationErrorResponse
        )
    ),
    tags(
        (name = "index", description = "Landing page"),
        (name = "restaurants", description = "Restaurants and their menus"),
        (name = "pizzas", description = "Pizza reference data"),
        (name = "restaurant_pizzas", description = "Priced menu items")
    ),
    info(
        title = "Pizza Restaurants",
        description = "Restaurants, pizzas and the prices restaurants charge for them",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
