//! Prometheus metrics for the consignment service.
//!
//! All metrics follow the naming convention: `consignment_<metric>_<unit>`
//! (counters end in `_total`).
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., consignments_created_total)
//! - **Gauge**: Current value (e.g., registry size)
//! - **Histogram**: Distribution of values (e.g., create duration)

use lazy_static::lazy_static;
use prometheus::{exponential_buckets, Encoder, Histogram, IntCounter, IntGauge, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Metrics registry for this process
    pub static ref REGISTRY: Registry = Registry::new();

    /// Total consignments accepted by CreateConsignment
    pub static ref CONSIGNMENTS_CREATED: IntCounter = IntCounter::new(
        "consignments_created_total",
        "Total number of consignments appended to the registry"
    ).expect("metric creation failed");

    /// Total CreateConsignment calls that returned an error
    pub static ref CONSIGNMENT_CREATE_FAILURES: IntCounter = IntCounter::new(
        "consignment_create_failures_total",
        "Total number of CreateConsignment calls that failed"
    ).expect("metric creation failed");

    /// Number of consignments currently held in memory.
    ///
    /// Process-wide: it tracks the single registry a running server owns.
    /// With several registries in one process it shows the last write.
    pub static ref REGISTRY_SIZE: IntGauge = IntGauge::new(
        "consignment_registry_size",
        "Number of consignments held in the in-memory registry"
    ).expect("metric creation failed");

    /// CreateConsignment handling time, lock wait included
    pub static ref CONSIGNMENT_CREATE_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "consignment_create_duration_seconds",
            "Time spent handling CreateConsignment"
        ).buckets(exponential_buckets(0.000_01, 2.0, 15).expect("valid bucket layout"))
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the process registry.
///
/// Calling this more than once is harmless: collectors that are already
/// registered are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(CONSIGNMENTS_CREATED.clone()),
        Box::new(CONSIGNMENT_CREATE_FAILURES.clone()),
        Box::new(REGISTRY_SIZE.clone()),
        Box::new(CONSIGNMENT_CREATE_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
