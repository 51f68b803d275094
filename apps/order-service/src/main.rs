//! Order Service Binary
//!
//! Serves the fixed order list at `GET /orders`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-service
//! ```
//!
//! # Environment Variables
//!
//! Host and port are optional overrides; unset, the service binds 0.0.0.0:3001.
//!
//! - `ORDER_SERVICE_HOST`: override of the bind address
//! - `ORDER_SERVICE_PORT`: override of the fixed port
//! - `RUST_LOG`: Log level (default: info)

use order_service::{OrderCatalog, OrderServer, ServiceConfig, infrastructure::telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = ServiceConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let catalog = OrderCatalog::seeded();

    let server = OrderServer::bind(&config, catalog)
        .await
        .inspect_err(|e| {
            tracing::error!(port = config.server.port, error = %e, "Order Service failed to start");
        })?;

    let port = server.local_addr()?.port();
    tracing::info!(port, "Order Service running on port {}", port);

    server.run().await.inspect_err(|e| {
        tracing::error!(error = %e, "Order Service stopped");
    })?;

    Ok(())
}
