//! Queries behind the routes. Reads take any executor; writes open their own transaction,
//! which rolls back when dropped without commit.

use crate::error::{AppError, ValidationError};
use crate::models::{CreatedMenuItem, MenuItemEntry, NewRestaurantPizza, Pizza, Price, Restaurant, RestaurantDetail};
use crate::service::MenuItemInput;
use sqlx::{SqliteExecutor, SqlitePool};

pub struct RestaurantService;

impl RestaurantService {
    /// All restaurants in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql).fetch_all(pool).await?)
    }

    pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<Restaurant>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = "SELECT id, name, address FROM restaurants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql).bind(id).fetch_optional(executor).await?)
    }

    /// Menu items of one restaurant, each with its pizza expanded.
    pub async fn menu_items<'e, E>(executor: E, restaurant_id: i64) -> Result<Vec<MenuItemEntry>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = r#"
            SELECT rp.id, rp.price, p.id AS pizza_id, p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
        "#;
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let rows = sqlx::query_as::<_, MenuItemRow>(sql)
            .bind(restaurant_id)
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(MenuItemEntry::from).collect())
    }

    /// Distinct pizzas a restaurant sells, through its menu items.
    pub async fn pizzas_for<'e, E>(executor: E, restaurant_id: i64) -> Result<Vec<Pizza>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = r#"
            SELECT DISTINCT p.id, p.name, p.ingredients
            FROM pizzas p
            JOIN restaurant_pizzas rp ON rp.pizza_id = p.id
            WHERE rp.restaurant_id = ?
            ORDER BY p.id
        "#;
        tracing::debug!(sql = %sql, restaurant_id, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql).bind(restaurant_id).fetch_all(executor).await?)
    }

    /// Restaurant and its menu read in one transaction, so a concurrent delete cannot split them.
    pub async fn detail(pool: &SqlitePool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(restaurant) = Self::find(&mut *tx, id).await? else {
            return Ok(None);
        };
        let menu = Self::menu_items(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(Some(RestaurantDetail::new(restaurant, menu)))
    }

    /// Pizzas of an existing restaurant; `None` when the restaurant is missing.
    pub async fn pizzas_of(pool: &SqlitePool, id: i64) -> Result<Option<Vec<Pizza>>, AppError> {
        let mut tx = pool.begin().await?;
        if Self::find(&mut *tx, id).await?.is_none() {
            return Ok(None);
        }
        let pizzas = Self::pizzas_for(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(Some(pizzas))
    }

    /// Delete a restaurant and its menu items in one transaction. Returns false if it did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        if Self::find(&mut *tx, id).await?.is_none() {
            return Ok(false);
        }
        let items = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, menu_items = items, "deleted restaurant");
        Ok(true)
    }

    pub async fn insert<'e, E>(executor: E, name: &str, address: &str) -> Result<Restaurant, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(executor)
            .await?
            .last_insert_rowid();
        Ok(Restaurant {
            id,
            name: name.to_string(),
            address: address.to_string(),
        })
    }
}

pub struct PizzaService;

impl PizzaService {
    /// All pizzas in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql).fetch_all(pool).await?)
    }

    pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<Pizza>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql).bind(id).fetch_optional(executor).await?)
    }

    pub async fn insert<'e, E>(executor: E, name: &str, ingredients: &str) -> Result<Pizza, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(name)
            .bind(ingredients)
            .execute(executor)
            .await?
            .last_insert_rowid();
        Ok(Pizza {
            id,
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        })
    }
}

pub struct MenuItemService;

impl MenuItemService {
    /// Only a [`NewRestaurantPizza`] can be written, so the price range is already checked.
    pub async fn insert<'e, E>(executor: E, item: NewRestaurantPizza) -> Result<i64, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)")
            .bind(item.price.get())
            .bind(item.restaurant_id)
            .bind(item.pizza_id)
            .execute(executor)
            .await?
            .last_insert_rowid();
        Ok(id)
    }

    /// Check price, check both references, insert and commit.
    pub async fn create(pool: &SqlitePool, input: MenuItemInput) -> Result<CreatedMenuItem, AppError> {
        let price = Price::new(input.price)?;

        let mut tx = pool.begin().await?;
        let restaurant = RestaurantService::find(&mut *tx, input.restaurant_id)
            .await?
            .ok_or(ValidationError::UnknownRestaurant(input.restaurant_id))?;
        let pizza = PizzaService::find(&mut *tx, input.pizza_id)
            .await?
            .ok_or(ValidationError::UnknownPizza(input.pizza_id))?;

        let item = NewRestaurantPizza {
            price,
            restaurant_id: restaurant.id,
            pizza_id: pizza.id,
        };
        let id = Self::insert(&mut *tx, item).await?;
        tx.commit().await?;
        tracing::info!(id, restaurant_id = restaurant.id, pizza_id = pizza.id, price = price.get(), "created menu item");

        Ok(CreatedMenuItem {
            id,
            price: price.get(),
            pizza,
            restaurant,
        })
    }
}

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    price: i64,
    pizza_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<MenuItemRow> for MenuItemEntry {
    fn from(row: MenuItemRow) -> Self {
        MenuItemEntry {
            id: row.id,
            price: row.price,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_migrations, connect_in_memory, run_seed};

    async fn seeded() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        run_seed(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn detail_reads_restaurant_and_menu_together() {
        let pool = seeded().await;
        let detail = RestaurantService::detail(&pool, 1).await.unwrap().unwrap();
        assert_eq!(detail.name, "Karen's Pizza Shack");
        assert_eq!(detail.restaurant_pizzas.len(), 2);
        assert!(RestaurantService::detail(&pool, 99).await.unwrap().is_none());

        // the early return drops its transaction; the single connection is free again
        assert_eq!(RestaurantService::list(&pool).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn pizzas_of_distinguishes_missing_from_empty() {
        let pool = seeded().await;
        let pizzas = RestaurantService::pizzas_of(&pool, 3).await.unwrap().unwrap();
        assert_eq!(pizzas.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["California"]);

        let empty = RestaurantService::insert(&pool, "Empty", "1 Nowhere").await.unwrap();
        assert_eq!(RestaurantService::pizzas_of(&pool, empty.id).await.unwrap(), Some(vec![]));
        assert!(RestaurantService::pizzas_of(&pool, 99).await.unwrap().is_none());
    }
}
