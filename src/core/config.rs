//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (a `.env` file is honoured) or defaults. The
//! configuration is built once at startup and shared read-only.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the API-Football v3 service.
pub const DEFAULT_API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Default header carrying the API key.
pub const DEFAULT_API_KEY_HEADER: &str = "x-rapidapi-key";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream football API configuration.
    pub football: FootballApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Connection settings for the API-Football service.
#[derive(Clone, Serialize, Deserialize)]
pub struct FootballApiConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// API key sent with every request.
    /// Get a key at: https://dashboard.api-football.com
    pub api_key: Option<String>,

    /// Name of the header carrying the API key.
    pub key_header: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for FootballApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootballApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("key_header", &self.key_header)
            .finish()
    }
}

impl Default for FootballApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            key_header: DEFAULT_API_KEY_HEADER.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "maestro".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            football: FootballApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_FOOTBALL_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_FOOTBALL_API_URL") {
            config.football.base_url = url;
        }

        if let Ok(header) = std::env::var("MCP_FOOTBALL_API_KEY_HEADER") {
            config.football.key_header = header;
        }

        config.football.api_key = std::env::var("MCP_FOOTBALL_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        config
    }

    /// Problems with the loaded configuration that do not stop startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.football.api_key.is_none() {
            warnings.push(
                "MCP_FOOTBALL_API_KEY not set - requests will be sent without an API key \
                 and rejected by the provider"
                    .to_string(),
            );
        }

        if self.football.api_key.is_some() && self.football.base_url.starts_with("http://") {
            warnings.push(format!(
                "Football API base URL {} is not HTTPS - the API key is sent in clear text",
                self.football.base_url
            ));
        }

        warnings
    }

    /// Report the upstream settings and any [`warnings`](Self::warnings).
    ///
    /// Called once the tracing subscriber is installed.
    pub fn log_summary(&self) {
        info!(
            "Football API: {} (key header: {}, key {})",
            self.football.base_url,
            self.football.key_header,
            if self.football.api_key.is_some() {
                "configured"
            } else {
                "missing"
            }
        );

        for warning in self.warnings() {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FOOTBALL_API_KEY", "  test_key_12345 ");
        }
        let config = Config::from_env();
        assert_eq!(config.football.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var("MCP_FOOTBALL_API_KEY");
        }
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FOOTBALL_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.football.api_key.is_none());
        unsafe {
            std::env::remove_var("MCP_FOOTBALL_API_KEY");
        }
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FOOTBALL_API_URL", "http://localhost:9999");
        }
        let config = Config::from_env();
        assert_eq!(config.football.base_url, "http://localhost:9999");
        unsafe {
            std::env::remove_var("MCP_FOOTBALL_API_URL");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let football = FootballApiConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", football);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_missing_key_is_reported() {
        let config = Config::default();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("MCP_FOOTBALL_API_KEY not set"));
    }

    #[test]
    fn test_plain_http_base_url_is_reported() {
        let mut config = Config::default();
        config.football.api_key = Some("key".to_string());
        assert!(config.warnings().is_empty());

        config.football.base_url = "http://localhost:9999".to_string();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("http://localhost:9999"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "maestro");
        assert_eq!(config.football.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.football.key_header, "x-rapidapi-key");
        assert!(config.football.api_key.is_none());
    }
}
