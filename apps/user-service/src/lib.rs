#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! User Service - Static User Records
//!
//! Serves a fixed list of users over HTTP. The directory is built once at
//! startup and injected into the router; handlers only ever read it.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: `User` records and the immutable `UserDirectory`
//! - **Infrastructure**: configuration, HTTP server, logging setup
//!
//! # Endpoints
//!
//! - `GET /users` - JSON array of every user, in insertion order

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - User records with no I/O.
pub mod domain;

/// Infrastructure layer - HTTP, configuration and logging.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::{User, UserDirectory};
pub use infrastructure::config::{ConfigError, DEFAULT_PORT, ServerSettings, ServiceConfig};
pub use infrastructure::http::{ServerError, UserServer, create_router};
pub use infrastructure::telemetry::init as init_telemetry;
