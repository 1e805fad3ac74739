//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOST` | 0.0.0.0 | Host to bind |
//! | `PORT` | 3000 | Server port |
//! | `REQUEST_TIMEOUT_SECONDS` | 30 | Request timeout (seconds) |
//! | `CORS_ORIGINS` | * | Allowed origins (comma-separated) |
//! | `APP_ENV` | development | Environment name reported by `/health` |
//!
//! Database settings are read separately by `DatabaseConfig`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Invalid server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    /// `*` or a comma-separated list of origins
    pub cors_origins: String,
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
            cors_origins: "*".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            request_timeout_seconds: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            )?,
            cors_origins: lookup("CORS_ORIGINS").unwrap_or(defaults.cors_origins),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        };

        if config.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECONDS",
                value: "0".to_string(),
                reason: "timeout cannot be 0".to_string(),
            });
        }

        Ok(config)
    }

    /// Returns the socket address to bind to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("CORS_ORIGINS", "http://localhost:5173"),
            ("APP_ENV", "staging"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:8081");
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.cors_origins, "http://localhost:5173");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().starts_with("PORT has an invalid value 'http'"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "0")])).is_err());
    }
}
