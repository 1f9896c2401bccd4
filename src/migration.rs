//! Schema DDL for the three tables. Creation order follows foreign-key dependencies.
//! Foreign keys use the `fk_<table>_<column>_<referred_table>` naming convention.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Table names, parents before children.
pub const TABLES: [&str; 3] = ["restaurants", "pizzas", "restaurant_pizzas"];

struct ForeignKey {
    column: &'static str,
    referred_table: &'static str,
}

const RESTAURANT_PIZZA_FKS: &[ForeignKey] = &[
    ForeignKey {
        column: "restaurant_id",
        referred_table: "restaurants",
    },
    ForeignKey {
        column: "pizza_id",
        referred_table: "pizzas",
    },
];

fn fk_name(table: &str, fk: &ForeignKey) -> String {
    format!("fk_{}_{}_{}", table, fk.column, fk.referred_table)
}

fn fk_clause(table: &str, fk: &ForeignKey) -> String {
    format!(
        "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} (id)",
        fk_name(table, fk),
        fk.column,
        fk.referred_table
    )
}

fn ddl() -> Vec<String> {
    let mut out = vec![
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#
        .to_string(),
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#
        .to_string(),
    ];

    let mut rp_defs = vec![
        "id INTEGER PRIMARY KEY".to_string(),
        "price INTEGER NOT NULL".to_string(),
        "restaurant_id INTEGER NOT NULL".to_string(),
        "pizza_id INTEGER NOT NULL".to_string(),
    ];
    for fk in RESTAURANT_PIZZA_FKS {
        rp_defs.push(fk_clause("restaurant_pizzas", fk));
    }
    out.push(format!(
        "CREATE TABLE IF NOT EXISTS restaurant_pizzas (\n    {}\n)",
        rp_defs.join(",\n    ")
    ));
    out
}

/// Create any missing table. Safe to run on every start.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for sql in ddl() {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(tables = ?TABLES, "schema ready");
    Ok(())
}
