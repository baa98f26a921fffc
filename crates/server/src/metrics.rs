//! Prometheus metrics
//!
//! The recorder is global; it is installed at most once per process.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder, returning the render handle
pub fn init_metrics() -> Option<PrometheusHandle> {
    PROMETHEUS
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
        .map(Clone::clone)
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
}

/// Count a tool call and record its latency
pub fn record_tool_call(tool: &str, status: &'static str, elapsed: Duration) {
    metrics::counter!("tool_calls_total", "tool" => tool.to_string(), "status" => status)
        .increment(1);
    metrics::histogram!("tool_call_duration_seconds", "tool" => tool.to_string())
        .record(elapsed.as_secs_f64());
}

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}
