//! Configuration error types.

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No path came from the CLI flag or the environment variable.
    #[error("config: no config file path given: pass --config or set {0}")]
    PathNotSet(&'static str),
    /// Path resolved but the file could not be read.
    #[error("config: {0}")]
    ReadFile(#[from] std::io::Error),
    /// File read but the content is not a valid configuration.
    #[error("config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
