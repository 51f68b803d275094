//! User Service Binary
//!
//! Serves the fixed user list at `GET /users`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin user-service
//! ```
//!
//! # Environment Variables
//!
//! Host and port are optional overrides; unset, the service binds 0.0.0.0:3000.
//!
//! - `USER_SERVICE_HOST`: override of the bind address
//! - `USER_SERVICE_PORT`: override of the fixed port
//! - `RUST_LOG`: Log level (default: info)

use user_service::{ServiceConfig, UserDirectory, UserServer, infrastructure::telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = ServiceConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let directory = UserDirectory::seeded();

    let server = UserServer::bind(&config, directory)
        .await
        .inspect_err(|e| {
            tracing::error!(port = config.server.port, error = %e, "User Service failed to start");
        })?;

    let port = server.local_addr()?.port();
    tracing::info!(port, "User Service running on port {}", port);

    server.run().await.inspect_err(|e| {
        tracing::error!(error = %e, "User Service stopped");
    })?;

    Ok(())
}
