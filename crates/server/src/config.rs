//! Server configuration structures and loaders.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use metagaming_core::PageLimits;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("RANKING_MIN_LIMIT ({min}) must not exceed RANKING_MAX_LIMIT ({max})")]
    LimitRange { min: i64, max: i64 },
}

/// Where repositories keep their data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "metagaming".to_string(),
        }
    }
}

/// Configuration required to bootstrap the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub storage: StorageBackend,
    pub mongo: MongoConfig,
    pub ranking: PageLimits,
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageBackend::default(),
            mongo: MongoConfig::default(),
            ranking: PageLimits::default(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HTTP_ADDR` - Listen address (default: 0.0.0.0:8080)
    /// - `STORAGE_BACKEND` - `mongo` or `memory` (default: mongo)
    /// - `MONGO_URI` - Connection string (default: mongodb://localhost:27017)
    /// - `MONGO_DATABASE` - Database name (default: metagaming)
    /// - `RANKING_MIN_LIMIT` - Smallest ranking page size (default: 1)
    /// - `RANKING_MAX_LIMIT` - Largest ranking page size (default: 100)
    /// - `LOG_DIR` - Also write logs to `LOG_DIR/server.log` (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = read_var(&lookup, "HTTP_ADDR")? {
            config.http_addr = addr;
        }
        if let Some(backend) = read_var(&lookup, "STORAGE_BACKEND")? {
            config.storage = backend;
        }

        // Mongo connection
        if let Some(uri) = lookup("MONGO_URI") {
            config.mongo.uri = uri;
        }
        if let Some(database) = lookup("MONGO_DATABASE") {
            config.mongo.database = database;
        }

        // Ranking page bounds
        if let Some(min) = read_var(&lookup, "RANKING_MIN_LIMIT")? {
            config.ranking.min_limit = min;
        }
        if let Some(max) = read_var(&lookup, "RANKING_MAX_LIMIT")? {
            config.ranking.max_limit = max;
        }
        if config.ranking.min_limit > config.ranking.max_limit {
            return Err(ConfigError::LimitRange {
                min: config.ranking.min_limit,
                max: config.ranking.max_limit,
            });
        }

        config.log_dir = lookup("LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}
