//! Runtime configuration read from the environment.

use std::{env, net::SocketAddr};
use thiserror::Error;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";

/// Default maximum number of pooled database connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `BIND_ADDR` is not a socket address.
    #[error("BIND_ADDR '{0}' is not a valid socket address")]
    InvalidBindAddr(String),

    /// `DATABASE_POOL_SIZE` is not a positive integer.
    #[error("DATABASE_POOL_SIZE '{0}' must be a positive integer")]
    InvalidPoolSize(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `PostgreSQL` URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_raw = read("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let pool_size = match read("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidPoolSize(raw)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url: read("DATABASE_URL"),
            bind_addr,
            pool_size,
        })
    }
}
