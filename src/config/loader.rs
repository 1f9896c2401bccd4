//! Load settings from the process environment (after `.env`), falling back to fixed defaults.

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

impl Settings {
    /// Read `DATABASE_URL`, `LISTEN_ADDR` and `DATABASE_MAX_CONNECTIONS` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()) {
            Some(url) => url,
            None => database_url_in(&executable_dir()?),
        };

        let listen_raw = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr: SocketAddr = listen_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "LISTEN_ADDR",
            value: listen_raw.clone(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Settings {
            database_url,
            listen_addr,
            max_connections,
        })
    }
}

fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")))
}
