//! # Metrics Collection Module
//!
//! Prometheus export for the dashboard service.
//!
//! ## Metrics Tracked
//!
//! **Counters:**
//! - `athena_generations_total{dataset}` - Generator invocations
//! - `athena_logins_total{outcome}` - Demo sign-in attempts
//!
//! **Histograms:**
//! - `athena_generated_records{dataset}` - Records produced per invocation
//!
//! **Gauges:**
//! - `athena_live_feed_size` - Snapshots held in the live system window
//!
//! Without an installed recorder every call here is a no-op, so generators
//! can record unconditionally.

pub mod handler;

pub use metrics_exporter_prometheus::PrometheusBuilder;

use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Instant;

/// Uptime tracking and Prometheus rendering.
pub struct MetricsCollector {
    /// Service startup time for uptime calculation
    start_time: Instant,
    /// Prometheus handle for rendering metrics
    prometheus_handle: PrometheusHandle,
}

impl MetricsCollector {
    pub fn new(start_time: Instant, prometheus_handle: PrometheusHandle) -> Self {
        Self {
            start_time,
            prometheus_handle,
        }
    }

    /// Get uptime in seconds since startup.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render Prometheus metrics in text format.
    pub fn render_metrics(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Record one generator invocation and its output size.
pub fn record_generation(dataset: &'static str, records: usize) {
    metrics::counter!("athena_generations_total", "dataset" => dataset).increment(1);
    metrics::histogram!("athena_generated_records", "dataset" => dataset).record(records as f64);
}

/// Record a sign-in attempt (`success` or `rejected`).
pub fn record_login(outcome: &'static str) {
    metrics::counter!("athena_logins_total", "outcome" => outcome).increment(1);
}

/// Publish the current live window size.
pub fn set_live_feed_size(size: usize) {
    metrics::gauge!("athena_live_feed_size").set(size as f64);
}

/// Initialize the Prometheus recorder with buckets sized for dataset lengths.
///
/// Request windows produce thousands of events; catalogs produce a handful.
pub fn setup_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    use metrics_exporter_prometheus::Matcher;

    let record_buckets = &[
        1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
    ];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("athena_generated_records".to_string()),
            record_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}
