//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Each handler acquires its own connection or transaction from `pool`; nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
