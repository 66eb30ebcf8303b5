//! Server configuration.
//!
//! A small TOML file with defaults suitable for local development:
//!
//! ```toml
//! bind = "127.0.0.1:8000"
//! database_url = "sqlite:lystra.db"
//! ```

use serde::{Deserialize, Serialize};

use lystra_core::Error;

use crate::error::Result;

/// Runtime configuration for the Lystra server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address and port to listen on.
    pub bind: String,
    /// sqlx database URL for the list store.
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            database_url: "sqlite:lystra.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the given TOML file, or defaults when no
    /// path is supplied.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| Error::config(format!("cannot read {path}: {e}")))?;
                let config = toml::from_str(&raw)
                    .map_err(|e| Error::config(format!("cannot parse {path}: {e}")))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
