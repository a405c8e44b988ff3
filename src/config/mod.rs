//! Configuration loading and validation for cats.
//!
//! The config file path comes from the `--config` CLI flag or the
//! `CATS_CONFIG_PATH` environment variable, in that order. The file is
//! YAML, decoded with serde_yaml into [`Config`] with field defaults
//! applied during decoding.

mod env;
mod error;
mod http;

pub use env::{Environment, InvalidEnvironment};
pub use error::ConfigError;
pub use http::HttpServerConfig;

use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable holding the config file path when the CLI flag
/// is absent.
pub const CONFIG_PATH_ENV: &str = "CATS_CONFIG_PATH";

fn default_storage_name() -> String {
    "storage/local.db".to_string()
}

/// Root configuration structure for cats.
///
/// Only `env` is required; every other field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deployment environment; selects the logging setup.
    pub env: Environment,
    /// Path to the storage database file.
    #[serde(default = "default_storage_name")]
    pub storage_name: String,
    /// HTTP server listen address.
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then reads and decodes the YAML config. Fail-fast: no retries,
    /// no partially populated configs.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;

        Ok(config)
    }
}

/// Pick the config file path from the CLI flag and the environment
/// variable, in that order of precedence.
///
/// Values that are blank after trimming count as not provided. Both
/// sources are injected, so precedence is testable without touching the
/// process environment.
pub fn resolve_path(flag: Option<&str>, env_var: Option<&str>) -> Result<String, ConfigError> {
    for candidate in [flag, env_var].into_iter().flatten() {
        let path = candidate.trim();
        if !path.is_empty() {
            return Ok(path.to_string());
        }
    }
    Err(ConfigError::PathNotSet(CONFIG_PATH_ENV))
}
