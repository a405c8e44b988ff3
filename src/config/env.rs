//! Deployment environment tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deployment environment declared in the config file.
///
/// Decodes only from the lowercase tags `local`, `dev` and `prod`;
/// any other string is a decode-time failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer workstation: console output at debug level.
    Local,
    /// Shared dev deployment: console plus log file at info level.
    Dev,
    /// Production: log file only at info level.
    Prod,
}

impl Environment {
    /// Lowercase tag as it appears in config files and logger names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for environment tags outside the three known variants.
#[derive(Debug, Error)]
#[error("log: invalid env var: {0}")]
pub struct InvalidEnvironment(pub String);

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(InvalidEnvironment(other.to_string())),
        }
    }
}
