//! Server configuration
//!
//! Configuration comes from the environment: `DISHDASH_HOST` and
//! `DISHDASH_PORT`, each optional. Defaults bind the development address
//! 127.0.0.1:3000.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Network configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("DISHDASH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("DISHDASH_PORT") {
            Ok(raw) => raw.parse().map_err(|source| ConfigError::InvalidPort {
                var: "DISHDASH_PORT",
                value: raw.clone(),
                source,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
