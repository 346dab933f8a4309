//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. Nothing below the
//! transport layer reads the environment: the API client and the tools only
//! see the values carried here.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::fathom::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and execution limits.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Fathom API settings.
    pub fathom: FathomConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Ceiling on a single tool invocation, in seconds.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` on its own, so logging can be set up before the
    /// rest of the configuration is parsed and can report problems with it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

/// Fathom API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct FathomConfig {
    /// Root of the external API.
    pub base_url: String,

    /// API key used in standalone (stdio) mode. HTTP requests bring their own.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for FathomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FathomConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for FathomConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "fathom-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                request_timeout_secs: 60,
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            fathom: FathomConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...); Fathom settings use `FATHOM_API_KEY` and
    /// `FATHOM_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(timeout) = std::env::var("MCP_REQUEST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.server.request_timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid MCP_REQUEST_TIMEOUT_SECS: {}", timeout),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("FATHOM_API_BASE_URL") {
            config.fathom.base_url = base_url;
        }

        config.fathom.api_key = std::env::var("FATHOM_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        config
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout_secs == 0 {
            return Err(Error::config("request timeout must be at least one second"));
        }

        let url = reqwest::Url::parse(&self.fathom.base_url).map_err(|e| {
            Error::config(format!(
                "invalid Fathom base URL '{}': {}",
                self.fathom.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Fathom base URL must be http(s): {}",
                self.fathom.base_url
            )));
        }

        Ok(())
    }
}
