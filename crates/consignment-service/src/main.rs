//! # Consignment Service
//!
//! Entry point for the shipping registry.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging + metrics)
//! 2. Load configuration from the environment
//! 3. Create the in-memory registry
//! 4. Bind the gRPC listener (failure is fatal)
//! 5. Serve until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use consignment_service::{ConsignmentService, InMemoryConsignmentRepository, ServiceConfig};
use consignment_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{error, info};

/// Resolves on Ctrl+C. If the handler cannot be installed the server keeps
/// running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    info!(
        version = consignment_service::VERSION,
        addr = %config.listen_addr(),
        "Starting consignment service"
    );

    let repository = Arc::new(InMemoryConsignmentRepository::new());
    let service = ConsignmentService::new(config, repository);

    let listener = service.bind().await.context("failed to listen")?;
    service
        .serve_with_shutdown(listener, shutdown_signal())
        .await
        .context("failed to serve")?;

    Ok(())
}
