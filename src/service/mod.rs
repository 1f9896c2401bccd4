//! Query services and request input normalization.

mod crud;
mod validation;
pub use crud::{MenuItemService, PizzaService, RestaurantService};
pub use validation::{coerce_int, FieldAliases, MenuItemInput};
