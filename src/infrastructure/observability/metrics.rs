//! Request metrics recorded through the `metrics` facade
//!
//! The library installs no recorder; applications decide where metrics go.

use std::time::Duration;

use metrics::{counter, histogram};

pub const REQUESTS_TOTAL: &str = "iam_sdk_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "iam_sdk_request_duration_seconds";
pub const REQUEST_ERRORS_TOTAL: &str = "iam_sdk_request_errors_total";

/// Parameters for SDK request metrics
pub struct RequestMetricParams<'a> {
    pub service: &'a str,
    pub operation: &'a str,
    pub method: &'a str,
    /// `None` when the request never got a response
    pub status: Option<u16>,
    pub duration: Duration,
}

/// Status label value; transport failures are labelled `error`
fn status_label(status: Option<u16>) -> String {
    status.map_or_else(|| "error".to_string(), |status| status.to_string())
}

/// Record one outbound API call
pub fn record_request(params: RequestMetricParams<'_>) {
    let labels = [
        ("service", params.service.to_string()),
        ("operation", params.operation.to_string()),
        ("method", params.method.to_string()),
        ("status", status_label(params.status)),
    ];

    counter!(REQUESTS_TOTAL, &labels).increment(1);
    histogram!(REQUEST_DURATION_SECONDS, &labels).record(params.duration.as_secs_f64());

    if !matches!(params.status, Some(200..=299)) {
        counter!(REQUEST_ERRORS_TOTAL, &labels).increment(1);
    }
}
