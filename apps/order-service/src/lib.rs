#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Order Service - Static Order Records
//!
//! Serves a fixed list of orders over HTTP. The list is built once at
//! startup and handed to the router as shared, read-only state.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: `Order` records and the immutable `OrderCatalog`
//! - **Infrastructure**: configuration, HTTP server, logging setup
//!
//! # Endpoints
//!
//! - `GET /orders` - JSON array of every order, in insertion order

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Order records with no I/O.
pub mod domain;

/// Infrastructure layer - HTTP, configuration and logging.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::{Order, OrderCatalog};
pub use infrastructure::config::{ConfigError, DEFAULT_PORT, ServerSettings, ServiceConfig};
pub use infrastructure::http::{OrderServer, ServerError, create_router};
pub use infrastructure::telemetry::init as init_telemetry;
