//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_decisions_total` (counter): decisions by strategy, target
//! - `router_decision_duration_seconds` (histogram): classification latency
//! - `router_config_reloads_total` (counter): hot reloads by outcome
//!
//! Without an installed recorder every call is a no-op.

use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::routing::Decision;

pub const DECISIONS_TOTAL: &str = "router_decisions_total";
pub const DECISION_DURATION_SECONDS: &str = "router_decision_duration_seconds";
pub const CONFIG_RELOADS_TOTAL: &str = "router_config_reloads_total";

/// Install the global Prometheus recorder and return a handle for rendering.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// Record a routing decision that started at `start`.
pub fn record_decision(decision: &Decision, start: Instant) {
    counter!(
        DECISIONS_TOTAL,
        "strategy" => decision.strategy.as_str(),
        "target" => decision.target.clone()
    )
    .increment(1);
    histogram!(DECISION_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
}

/// Record a configuration reload outcome (`applied`, `rejected`).
pub fn record_config_reload(outcome: &'static str) {
    counter!(CONFIG_RELOADS_TOTAL, "outcome" => outcome).increment(1);
}
