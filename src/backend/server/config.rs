/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (after `.env` has been read by `main`).
 *
 * # Variables
 *
 * - `JWT_SECRET` - token signing secret (required)
 * - `DATABASE_URL` - PostgreSQL connection string; when unset the server
 *   runs on the in-memory store
 * - `SERVER_PORT` - listen port (default 3000)
 * - `TOKEN_TTL_HOURS` - token lifetime (default 720, i.e. 30 days)
 * - `STORE_TIMEOUT_MS` - deadline for a single store call (default 5000)
 * - `DATABASE_MAX_CONNECTIONS` - pool size (default 5)
 * - `BCRYPT_COST` - bcrypt work factor (default `bcrypt::DEFAULT_COST`)
 *
 * # Error Handling
 *
 * A missing secret or an unparsable value is fatal: `main` reports it and
 * exits before binding the listener.
 */

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 30 * 24;
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration and startup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set (or is empty)
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is set to a value that cannot be used
    #[error("Invalid value {value:?} for {key}")]
    Invalid {
        key: &'static str,
        value: String,
    },

    /// The configured database could not be reached
    #[error("Failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub database_url: Option<String>,
    pub port: u16,
    pub token_ttl: Duration,
    pub store_timeout: Duration,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        let database_url = get("DATABASE_URL");

        let port = parse_or(&get, "SERVER_PORT", DEFAULT_PORT)?;
        let token_ttl_hours = parse_or(&get, "TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;
        let store_timeout_ms = parse_or(&get, "STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?;
        let max_connections = parse_or(&get, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let bcrypt_cost = parse_or(&get, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;

        if token_ttl_hours == 0 {
            return Err(invalid("TOKEN_TTL_HOURS", token_ttl_hours));
        }
        if store_timeout_ms == 0 {
            return Err(invalid("STORE_TIMEOUT_MS", store_timeout_ms));
        }
        if max_connections == 0 {
            return Err(invalid("DATABASE_MAX_CONNECTIONS", max_connections));
        }
        // bcrypt accepts work factors 4..=31
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", bcrypt_cost));
        }

        Ok(Self {
            jwt_secret,
            database_url,
            port,
            token_ttl: Duration::from_secs(token_ttl_hours * 60 * 60),
            store_timeout: Duration::from_millis(store_timeout_ms),
            max_connections,
            bcrypt_cost,
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("token_ttl", &self.token_ttl)
            .field("store_timeout", &self.store_timeout)
            .field("max_connections", &self.max_connections)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}
