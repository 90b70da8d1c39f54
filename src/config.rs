//! Configuration from environment variables
//!
//! | Variable                 | Default             |
//! |--------------------------|---------------------|
//! | `TEDDY_EVENTS_PATH`      | `data/events.jsonl` |
//! | `TEDDY_BIND_ADDR`        | `127.0.0.1:3000`    |
//! | `TEDDY_QUERY_TIMEOUT_MS` | `5000`              |
//! | `TEDDY_QUERY_RETRIES`    | `2`                 |
//! | `TEDDY_RETRY_BACKOFF_MS` | `100`               |
//!
//! Values wrapped in double quotes (as docker env files often leave them)
//! are unquoted first.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::event_store::StoreConfig;

pub const EVENTS_PATH_VAR: &str = "TEDDY_EVENTS_PATH";
pub const BIND_ADDR_VAR: &str = "TEDDY_BIND_ADDR";
pub const QUERY_TIMEOUT_VAR: &str = "TEDDY_QUERY_TIMEOUT_MS";
pub const QUERY_RETRIES_VAR: &str = "TEDDY_QUERY_RETRIES";
pub const RETRY_BACKOFF_VAR: &str = "TEDDY_RETRY_BACKOFF_MS";

/// Errors while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Per-query resilience settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Upper bound on a single store query
    pub timeout: Duration,
    /// Extra attempts after a transient failure
    pub max_retries: u32,
    /// Delay before the first retry; grows linearly per attempt
    pub retry_backoff: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            max_retries: 2,
            retry_backoff: Duration::from_millis(100),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsConfig {
    pub store: StoreConfig,
    pub query: QueryConfig,
    pub server: ServerConfig,
}

impl StatsConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, resolving relative paths
    /// against `base_dir`
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| unquote(&v).to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let events_path = match read(EVENTS_PATH_VAR) {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => base_dir.join(path),
            None => base_dir.join(defaults.store.events_path()),
        };

        let bind_addr = match read(BIND_ADDR_VAR) {
            Some(value) => parse_value(BIND_ADDR_VAR, value)?,
            None => defaults.server.bind_addr,
        };

        let timeout = match read(QUERY_TIMEOUT_VAR) {
            Some(value) => Duration::from_millis(parse_value(QUERY_TIMEOUT_VAR, value)?),
            None => defaults.query.timeout,
        };
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: QUERY_TIMEOUT_VAR,
                value: "0".to_string(),
            });
        }

        let max_retries = match read(QUERY_RETRIES_VAR) {
            Some(value) => parse_value(QUERY_RETRIES_VAR, value)?,
            None => defaults.query.max_retries,
        };

        let retry_backoff = match read(RETRY_BACKOFF_VAR) {
            Some(value) => Duration::from_millis(parse_value(RETRY_BACKOFF_VAR, value)?),
            None => defaults.query.retry_backoff,
        };

        Ok(Self {
            store: StoreConfig::new(events_path),
            query: QueryConfig {
                timeout,
                max_retries,
                retry_backoff,
            },
            server: ServerConfig { bind_addr },
        })
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
