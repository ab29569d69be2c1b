//! Server configuration.
//!
//! Defaults are usable as-is. An optional TOML file can override any field,
//! and `ECO_PLANNER_ADDR` overrides the bind address.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::scoring::{InvalidWeights, ScoringConfig};

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_ENV: &str = "ECO_PLANNER_CONFIG";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "ECO_PLANNER_ADDR";

/// Errors loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Bind address override is malformed
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// Scoring weights are unusable
    #[error(transparent)]
    InvalidWeights(#[from] InvalidWeights),

    /// Batch limit must allow at least one route
    #[error("max_batch_routes must be at least 1")]
    ZeroBatchLimit,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Largest batch accepted by the scoring endpoint.
    pub max_batch_routes: usize,

    /// Scoring weights.
    pub scoring: ScoringConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_batch_routes: 50,
            scoring: ScoringConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Build the config from the environment.
    ///
    /// Reads the file named by `ECO_PLANNER_CONFIG` if set, otherwise uses
    /// defaults, then applies `ECO_PLANNER_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(CONFIG_PATH_ENV).ok().as_deref(),
            std::env::var(BIND_ADDR_ENV).ok().as_deref(),
        )
    }

    fn from_vars(config_path: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(value) = bind_addr {
            config.bind_addr = value.parse().map_err(|source| ConfigError::BindAddr {
                value: value.to_string(),
                source,
            })?;
        }

        Ok(config)
    }

    /// Check limits and scoring weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_batch_routes == 0 {
            return Err(ConfigError::ZeroBatchLimit);
        }
        self.scoring.validate()?;
        Ok(())
    }
}
