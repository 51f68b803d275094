//! Infrastructure Layer - HTTP server, configuration and logging.

/// Service configuration.
pub mod config;

/// HTTP router and listener.
pub mod http;

/// Logging setup.
pub mod telemetry;
