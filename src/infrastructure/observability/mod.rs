//! Observability infrastructure - Tracing and Metrics

mod config;
mod metrics;
mod tracing_setup;

pub use config::{ObservabilityConfig, TracingConfig};
pub use metrics::{
    record_request, RequestMetricParams, REQUESTS_TOTAL, REQUEST_DURATION_SECONDS,
    REQUEST_ERRORS_TOTAL,
};
pub use tracing_setup::{init_tracing, shutdown_tracing};
