//! Reset the store to a fixed sample dataset.
//!
//! Runs as four transactions: wipe (children before parents), restaurants, pizzas, menu items.
//! A failing step rolls back its own transaction and the error is returned to the caller.

use crate::error::AppError;
use crate::migration::apply_migrations;
use crate::models::{NewRestaurantPizza, Pizza, Price, Restaurant};
use crate::service::{MenuItemService, PizzaService, RestaurantService};
use crate::store::{table_counts, TableCounts};
use sqlx::SqlitePool;

pub const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "123 Main St"),
    ("Sanjay's Pizza", "456 Oak Ave"),
    ("Kiki's Pizza", "789 Pine Rd"),
];

pub const PIZZAS: [(&str, &str); 3] = [
    ("Margherita", "Dough, Tomato Sauce, Cheese"),
    ("Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("California", "Dough, Sauce, Ricotta, Red peppers"),
];

/// (restaurant index, pizza index, price) into [`RESTAURANTS`] and [`PIZZAS`].
pub const MENU_ITEMS: [(usize, usize, i64); 4] = [(0, 0, 12), (0, 1, 14), (1, 0, 13), (2, 2, 15)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: Vec<Restaurant>,
    pub pizzas: Vec<Pizza>,
    pub menu_item_ids: Vec<i64>,
}

pub async fn run_seed(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    tracing::info!("starting seed");
    match seed(pool).await {
        Ok(summary) => {
            tracing::info!(
                restaurants = summary.restaurants.len(),
                pizzas = summary.pizzas.len(),
                menu_items = summary.menu_item_ids.len(),
                "seeding complete"
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!(error = %e, "seeding failed");
            Err(e)
        }
    }
}

/// Everything the seed binary does against an open pool: migrate, seed, count.
/// Any error leaves earlier committed steps in place and is returned as-is.
pub async fn seed_store(pool: &SqlitePool) -> Result<TableCounts, AppError> {
    apply_migrations(pool).await?;
    run_seed(pool).await?;
    table_counts(pool).await
}

async fn seed(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    tracing::info!("deleting old data");
    let mut tx = pool.begin().await?;
    for table in ["restaurant_pizzas", "pizzas", "restaurants"] {
        sqlx::query(&format!("DELETE FROM {}", table)).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    let mut tx = pool.begin().await?;
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(RestaurantService::insert(&mut *tx, name, address).await?);
    }
    tx.commit().await?;

    let mut tx = pool.begin().await?;
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(PizzaService::insert(&mut *tx, name, ingredients).await?);
    }
    tx.commit().await?;

    let mut tx = pool.begin().await?;
    let mut menu_item_ids = Vec::with_capacity(MENU_ITEMS.len());
    for (r, p, price) in MENU_ITEMS {
        let item = NewRestaurantPizza {
            price: Price::new(price)?,
            restaurant_id: restaurants[r].id,
            pizza_id: pizzas[p].id,
        };
        menu_item_ids.push(MenuItemService::insert(&mut *tx, item).await?);
    }
    tx.commit().await?;

    Ok(SeedSummary {
        restaurants,
        pizzas,
        menu_item_ids,
    })
}
