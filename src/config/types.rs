//! Runtime settings for the server and seed processes.

use std::net::SocketAddr;
use std::path::Path;

/// File name of the SQLite store, placed next to the executable unless `DATABASE_URL` is set.
pub const DATABASE_FILE: &str = "app.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5555";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
}

/// `sqlite://<dir>/app.db?mode=rwc` so the file is created on first connect.
pub fn database_url_in(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join(DATABASE_FILE).display())
}
