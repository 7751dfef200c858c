// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use super::colors::ColorScheme;
use super::constants::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("server host must not be empty")]
    EmptyHost,

    #[error("server port must be between 1 and 65535")]
    ZeroPort,

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("invalid value {value:?} for {name}: expected a port number")]
    InvalidEnvPort { name: &'static str, value: String },
}

/// Where and how to reach the dictionary server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout. Absent means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Grace period for an in-flight query when the session exits
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: None,
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }

    /// `host:port` for display
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_shutdown_grace_ms() -> u64 {
    DEFAULT_SHUTDOWN_GRACE_MS
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub client: ClientConfig,

    /// Resolved screen colors (theme, or explicit [colors] table)
    pub colors: ColorScheme,

    /// Log file; `None` uses ~/.madslang/madslang.log
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.client.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.client.request_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.client.address(), "127.0.0.1:8080");
        assert_eq!(config.client.request_timeout(), None);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::default();
        config.client.host = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyHost));

        let mut config = Config::default();
        config.client.port = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPort));

        let mut config = Config::default();
        config.client.request_timeout_secs = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_client_config_partial_toml() {
        let client: ClientConfig = toml::from_str("port = 9090").unwrap();
        assert_eq!(client.host, DEFAULT_HOST);
        assert_eq!(client.port, 9090);
        assert_eq!(client.shutdown_grace(), Duration::from_millis(DEFAULT_SHUTDOWN_GRACE_MS));
    }
}
