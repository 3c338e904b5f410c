//! Configuration loading and constants.
//!
//! Defines the response payload constants, environment variable names and
//! default values, and `AppConfig`, the root configuration struct. Settings are
//! layered: built-in defaults, then an optional TOML file named by
//! `CONFIG_PATH`, then the `PORT` environment variable.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// Response Payloads
// =============================================================================

/// Greeting returned by `GET /`
pub const GREETING_MESSAGE: &str = "Hello from the microservice!";

/// Liveness status returned by `GET /health`
pub const HEALTH_STATUS: &str = "healthy";

/// Liveness probes must always hit the process, never a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port to listen on
pub const PORT_ENV: &str = "PORT";

/// Optional path to a TOML configuration file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Log output format (text or json)
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Standard tracing filter variable
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or not a valid port number
pub const DEFAULT_PORT: u16 = 3000;

/// Bind on all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "sample_microservice=info,tower_http=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Parse a raw `PORT` value, returning `None` for anything that is not a u16.
pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Build the effective configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Build the effective configuration using `lookup` for environment access.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => {
                let config = Self::load(&path)?;
                tracing::info!(path = %path, "Loaded configuration file");
                config
            }
            None => Self::default(),
        };

        config.apply_env(lookup);
        Ok(config)
    }

    /// Apply environment overrides on top of the current values.
    ///
    /// An invalid `PORT` is not an error: the previously configured port
    /// (3000 unless a config file says otherwise) is kept.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PORT_ENV) {
            match parse_port(&raw) {
                Some(port) => self.http.port = port,
                None => {
                    tracing::warn!(
                        value = %raw,
                        fallback = self.http.port,
                        "Ignoring invalid PORT value"
                    );
                }
            }
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown log format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
