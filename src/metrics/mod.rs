// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics, GATEWAY_ERRORS, REQUESTS_TOTAL, REQUEST_DURATION, UPSTREAM_CALLS,
    UPSTREAM_DURATION,
};

/// Helper to record inbound request metrics
pub fn record_request(method: &str, route: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, route, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, route])
        .observe(duration_secs);
}

/// Helper to record an outbound vendor call
pub fn record_upstream_call(provider: &str, outcome: &str, duration_secs: f64) {
    UPSTREAM_CALLS.with_label_values(&[provider, outcome]).inc();
    UPSTREAM_DURATION
        .with_label_values(&[provider])
        .observe(duration_secs);
}

/// Helper to record an error returned to a client
pub fn record_gateway_error(provider: &str, kind: &str) {
    GATEWAY_ERRORS.with_label_values(&[provider, kind]).inc();
}
