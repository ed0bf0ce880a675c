use std::net::SocketAddr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://courseboard.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from the environment, falling back to the local
    /// SQLite file and the default bind address when unset.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source: e,
            })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
