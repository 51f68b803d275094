//! HTTP Server
//!
//! Binds the listener and serves the order catalog.
//!
//! # Endpoints
//!
//! - `GET /orders` - JSON array of all orders
//!
//! Anything else is left to axum's default 404/405 handling.

use std::io;
use std::net::SocketAddr;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tokio::net::TcpListener;

use crate::domain::OrderCatalog;
use crate::infrastructure::config::ServiceConfig;

/// Create the Axum router serving the given catalog.
#[must_use]
pub fn create_router(catalog: OrderCatalog) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .with_state(catalog)
}

async fn list_orders(State(catalog): State<OrderCatalog>) -> impl IntoResponse {
    tracing::debug!(count = catalog.len(), "Serving orders");
    Json(catalog)
}

// =============================================================================
// Server
// =============================================================================

/// Order HTTP server with a bound listener.
pub struct OrderServer {
    listener: TcpListener,
    router: Router,
}

impl OrderServer {
    /// Bind the listener described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::BindFailed` if the address cannot be bound,
    /// e.g. because the port is already in use.
    pub async fn bind(config: &ServiceConfig, catalog: OrderCatalog) -> Result<Self, ServerError> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::BindFailed {
                port: addr.port(),
                source,
            })?;

        Ok(Self {
            listener,
            router: create_router(catalog),
        })
    }

    /// Address the listener is bound to.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be read.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until the process exits.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::ServeFailed` if the accept loop fails.
    pub async fn run(self) -> Result<(), ServerError> {
        axum::serve(self.listener, self.router)
            .await
            .map_err(ServerError::ServeFailed)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to port.
    #[error("failed to bind to port {port}: {source}")]
    BindFailed {
        /// Port that could not be bound.
        port: u16,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Server error.
    #[error("server error: {0}")]
    ServeFailed(#[source] io::Error),
}

// =============================================================================
// Tests
// =============================================================================
