//! Service Configuration
//!
//! The service binds a fixed port. The bind host and port may be overridden
//! from the environment; with nothing set the defaults apply.
//!
//! # Environment Variables
//!
//! Both are optional overrides; unset, the service binds 0.0.0.0:3001.
//!
//! - `ORDER_SERVICE_HOST`: override of the bind address
//! - `ORDER_SERVICE_PORT`: override of the fixed port

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the Order Service listens on.
pub const DEFAULT_PORT: u16 = 3001;

const HOST_VAR: &str = "ORDER_SERVICE_HOST";
const PORT_VAR: &str = "ORDER_SERVICE_PORT";

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
    /// Returns an error if `ORDER_SERVICE_HOST` is set but is not an IP address.
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
