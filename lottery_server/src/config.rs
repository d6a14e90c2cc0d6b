//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use lottery_engine::session::{DEFAULT_MAX_SESSIONS, DEFAULT_REPRODUCIBLE_SEED, SessionConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default HTTP bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Default cap on uploaded entry-list size (16 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP bind address
    pub bind: SocketAddr,
    /// Prometheus scrape address; metrics are disabled when unset
    pub metrics_bind: Option<SocketAddr>,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
    /// Draw session settings
    pub sessions: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `metrics_bind_override` - Optional metrics address override (from CLI args)
    /// * `max_sessions_override` - Optional session cap override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if an address variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        metrics_bind_override: Option<SocketAddr>,
        max_sessions_override: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(addr) => addr,
            None => parse_addr_env("SERVER_BIND")?.unwrap_or(DEFAULT_BIND),
        };

        let metrics_bind = match metrics_bind_override {
            Some(addr) => Some(addr),
            None => parse_addr_env("METRICS_BIND")?,
        };

        let max_sessions = max_sessions_override
            .unwrap_or_else(|| parse_env_or("MAX_SESSIONS", DEFAULT_MAX_SESSIONS));

        let reproducible_seed = std::env::var("REPRODUCIBLE_SEED")
            .unwrap_or_else(|_| DEFAULT_REPRODUCIBLE_SEED.to_string());

        Ok(ServerConfig {
            bind,
            metrics_bind,
            max_upload_bytes: parse_env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            sessions: SessionConfig {
                max_sessions,
                reproducible_seed,
            },
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sessions.max_sessions == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_SESSIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_UPLOAD_BYTES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.sessions.reproducible_seed.is_empty() {
            return Err(ConfigError::Invalid {
                var: "REPRODUCIBLE_SEED".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            metrics_bind: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sessions: SessionConfig::default(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_addr_env(key: &str) -> Result<Option<SocketAddr>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Not a socket address: {value}"),
            }),
        Err(_) => Ok(None),
    }
}
