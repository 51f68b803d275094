//! HTTP Server
//!
//! # Endpoints
//!
//! - `GET /users` - JSON array of all users
//!
//! Unknown paths and methods fall through to axum's defaults.

use std::io;
use std::net::SocketAddr;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tokio::net::TcpListener;

use crate::domain::UserDirectory;
use crate::infrastructure::config::ServiceConfig;

/// Create the Axum router serving the given directory.
#[must_use]
pub fn create_router(directory: UserDirectory) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .with_state(directory)
}

async fn list_users(State(directory): State<UserDirectory>) -> impl IntoResponse {
    tracing::debug!(count = directory.len(), "Serving users");
    Json(directory)
}

// =============================================================================
// Server
// =============================================================================

/// User HTTP server with a bound listener.
pub struct UserServer {
    listener: TcpListener,
    router: Router,
}

impl UserServer {
    /// Bind the listener described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::BindFailed` if the address cannot be bound.
    pub async fn bind(config: &ServiceConfig, directory: UserDirectory) -> Result<Self, ServerError> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::BindFailed {
                port: addr.port(),
                source,
            })?;

        Ok(Self {
            listener,
            router: create_router(directory),
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
