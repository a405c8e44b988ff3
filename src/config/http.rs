//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Listen address for the embedded HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Bind host (default: 127.0.0.1).
    pub host: String,
    /// Bind port (default: 6810).
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6810,
        }
    }
}
