//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1, must be loopback)
//! - `STOREFRONT_PORT` - Listen port (default: 8000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid or the host is not a
    /// loopback address.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid or the host is not a
    /// loopback address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(&lookup, "STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        if !host.is_loopback() {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_HOST".to_string(),
                format!("{host} is not a loopback address"),
            ));
        }

        let port = get_or_default(&lookup, "STOREFRONT_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        Ok(Self { host, port })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_ipv6_loopback_allowed() {
        let config = StorefrontConfig::from_lookup(|key| match key {
            "STOREFRONT_HOST" => Some("::1".to_string()),
            "STOREFRONT_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "[::1]:9090");
    }

    #[test]
    fn test_non_loopback_rejected() {
        let result = StorefrontConfig::from_lookup(|key| {
            (key == "STOREFRONT_HOST").then(|| "0.0.0.0".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(ref k, _)) if k == "STOREFRONT_HOST"));
    }

    #[test]
    fn test_invalid_port() {
        let result = StorefrontConfig::from_lookup(|key| {
            (key == "STOREFRONT_PORT").then(|| "eighty".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(ref k, _)) if k == "STOREFRONT_PORT"));
    }
}
