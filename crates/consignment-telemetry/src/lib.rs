//! # Consignment Telemetry
//!
//! Observability for the consignment service.
//!
//! ## Components
//!
//! - **Logging**: `tracing` subscriber with an env filter and either pretty
//!   or JSON output
//! - **Metrics**: Prometheus counters, gauges and histograms for the registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use consignment_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//!     // Logs and metrics are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CONSIGNMENT_SERVICE_NAME` | `consignment-service` | Service name in log lines |
//! | `CONSIGNMENT_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CONSIGNMENT_CONSOLE_OUTPUT` | `true` | Write log lines to stdout |
//! | `CONSIGNMENT_JSON_LOGS` | `false` | JSON log lines (defaults to `true` in containers) |

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, MetricsHandle, CONSIGNMENTS_CREATED,
    CONSIGNMENT_CREATE_DURATION, CONSIGNMENT_CREATE_FAILURES, REGISTRY_SIZE,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
///
/// # Errors
///
/// Fails if a global subscriber is already installed or the log filter
/// cannot be parsed.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so the first log line can already be counted against them
    let metrics_handle = register_metrics()?;

    tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
