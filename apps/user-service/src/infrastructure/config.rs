//! Service Configuration
//!
//! The service binds a fixed port. Host and port can be overridden from the
//! environment for local runs and tests.
//!
//! # Environment Variables
//!
//! Both are optional overrides; unset, the service binds 0.0.0.0:3000.
//!
//! - `USER_SERVICE_HOST`: override of the bind address
//! - `USER_SERVICE_PORT`: override of the fixed port

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the User Service listens on.
pub const DEFAULT_PORT: u16 = 3000;

const HOST_VAR: &str = "USER_SERVICE_HOST";
const PORT_VAR: &str = "USER_SERVICE_PORT";

/// Listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Listener settings.
    pub server: ServerSettings,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `USER_SERVICE_HOST` is set but is not an IP address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the host value is set but is not an IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let host = match lookup(HOST_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            _ => defaults.host,
        };

        let port = parse_u16(lookup(PORT_VAR), defaults.port);

        Ok(Self {
            server: ServerSettings { host, port },
        })
    }

    /// Socket address the listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Bind host is not a valid IP address.
    #[error("invalid bind host: {0}")]
    InvalidHost(String),
}

fn parse_u16(value: Option<String>, default: u16) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_bind_all_interfaces_on_fixed_port() {
        let config = ServiceConfig::from_lookup(no_vars).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn port_override_applies() {
        let config = ServiceConfig::from_lookup(|key| {
            (key == PORT_VAR).then(|| " 8080 ".to_string())
        })
        .unwrap();

        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let config =
            ServiceConfig::from_lookup(|key| (key == HOST_VAR).then(|| "::1".to_string())).unwrap();

        assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config =
            ServiceConfig::from_lookup(|key| (key == PORT_VAR).then(|| "-1".to_string())).unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_host_is_rejected() {
        let result =
            ServiceConfig::from_lookup(|key| (key == HOST_VAR).then(|| "0.0.0.0.0".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidHost(_))));
    }
}
