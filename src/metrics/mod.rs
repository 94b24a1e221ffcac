// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics, FALLBACKS_TOTAL, PROVIDER_CALLS, PROVIDER_DURATION, REQUESTS_TOTAL,
    REQUEST_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .observe(duration_secs);
}

/// Helper to record upstream provider call metrics
pub fn record_provider_call(provider: &str, status_code: u16, duration_secs: f64) {
    PROVIDER_CALLS
        .with_label_values(&[provider, &status_code.to_string()])
        .inc();

    PROVIDER_DURATION
        .with_label_values(&[provider])
        .observe(duration_secs);
}

/// Helper to record a pipeline stage falling back to its input
pub fn record_fallback(stage: &str) {
    FALLBACKS_TOTAL.with_label_values(&[stage]).inc();
}
