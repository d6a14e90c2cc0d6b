//! Prometheus metrics for monitoring draw activity.
//!
//! Metrics are exposed in Prometheus text format at `http://<METRICS_BIND>/metrics`
//! once [`init_metrics`] has been called. Without an installed recorder every
//! function here is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use lottery_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::draw_sessions_created_total("manual");
//! metrics::active_draw_sessions(1);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// # Arguments
///
/// - `addr`: Address to bind the metrics server to (e.g., `0.0.0.0:9090`)
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// Increments the total HTTP request counter with method and status labels.
pub fn http_requests_total(method: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

// ============================================================================
// Draw Metrics
// ============================================================================

/// Increment created sessions counter, labelled by input source kind.
pub fn draw_sessions_created_total(source: &str) {
    metrics::counter!("draw_sessions_created_total",
        "source" => source.to_string()
    )
    .increment(1);
}

/// Set current live sessions count.
pub fn active_draw_sessions(count: usize) {
    metrics::gauge!("active_draw_sessions").set(count as f64);
}

/// Increment shuffles counter, labelled by randomization mode.
pub fn draw_shuffles_total(mode: &str) {
    metrics::counter!("draw_shuffles_total",
        "mode" => mode.to_string()
    )
    .increment(1);
}

/// Increment winners drawn counter.
pub fn draw_winners_total() {
    metrics::counter!("draw_winners_total").increment(1);
}

/// Increment completed draws counter.
pub fn draws_completed_total() {
    metrics::counter!("draws_completed_total").increment(1);
}

/// Increment CSV exports counter.
pub fn draw_exports_total() {
    metrics::counter!("draw_exports_total").increment(1);
}
