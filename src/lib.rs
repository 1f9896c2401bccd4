//! Pizza restaurants: restaurants, pizzas and their priced menu items over a small REST API.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, ValidationError};
pub use migration::apply_migrations;
pub use models::{Pizza, Price, Restaurant, RestaurantPizza};
pub use routes::{api_routes, app, common_routes, docs_routes};
pub use seed::{run_seed, seed_store, SeedSummary};
pub use state::AppState;
pub use store::{connect, connect_in_memory, table_counts, TableCounts};
