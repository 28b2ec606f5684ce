// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of inbound translation requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of inbound requests"),
        &["method", "route", "status_code"],
        REGISTRY
    ).unwrap();

    /// Inbound request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["method", "route"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM METRICS
    // ============================================================================

    /// Outbound vendor calls
    pub static ref UPSTREAM_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("upstream_calls_total", "Total outbound translation vendor calls"),
        &["provider", "outcome"], // outcome: HTTP status, timeout, network
        REGISTRY
    ).unwrap();

    /// Outbound vendor call duration
    pub static ref UPSTREAM_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("upstream_duration_seconds", "Translation vendor call duration")
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["provider"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // ERROR METRICS
    // ============================================================================

    /// Gateway errors returned to clients
    pub static ref GATEWAY_ERRORS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gateway_errors_total", "Total errors returned to clients"),
        &["provider", "kind"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        REQUESTS_TOTAL.with_label_values(&["POST", "/translate/:provider", "200"]).inc();
        UPSTREAM_CALLS.with_label_values(&["deepl", "200"]).inc();
        GATEWAY_ERRORS.with_label_values(&["none", "UnknownProvider"]).inc();

        let metrics = gather_metrics();
        assert!(metrics.contains("requests_total"));
        assert!(metrics.contains("upstream_calls_total"));
        assert!(metrics.contains("gateway_errors_total"));
    }
}
