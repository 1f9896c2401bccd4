//! Connection pool construction and store-wide queries. All tables live in one SQLite file.

use crate::config::Settings;
use crate::error::AppError;
use crate::migration::TABLES;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fmt;
use std::str::FromStr;

/// Open the pool described by `settings`, creating the database file if it is missing.
/// Foreign keys are enforced on every connection.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %settings.database_url, "connected to store");
    Ok(pool)
}

/// Private in-memory store. A single connection that is never recycled, since each
/// in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub restaurants: i64,
    pub pizzas: i64,
    pub restaurant_pizzas: i64,
}

/// The summary the seed binary prints, one table per line.
impl fmt::Display for TableCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurants: {}", self.restaurants)?;
        writeln!(f, "Pizzas: {}", self.pizzas)?;
        write!(f, "Menu Items: {}", self.restaurant_pizzas)
    }
}

pub async fn table_counts(pool: &SqlitePool) -> Result<TableCounts, AppError> {
    let mut counts = [0i64; 3];
    for (slot, table) in counts.iter_mut().zip(TABLES) {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        tracing::debug!(sql = %sql, "query");
        *slot = sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?;
    }
    let [restaurants, pizzas, restaurant_pizzas] = counts;
    Ok(TableCounts {
        restaurants,
        pizzas,
        restaurant_pizzas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;

    #[tokio::test]
    async fn fresh_store_is_empty() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        assert_eq!(table_counts(&pool).await.unwrap(), TableCounts::default());
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (10, 1, 1)")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }
}
