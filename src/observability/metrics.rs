//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): API requests by method, route, status
//! - `relay_request_duration_seconds` (histogram): API latency by route
//! - `relay_upstream_errors_total` (counter): failed provider calls by endpoint, kind
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed API request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a failed provider call.
pub fn record_upstream_error(endpoint: &'static str, kind: &'static str) {
    metrics::counter!("relay_upstream_errors_total", "endpoint" => endpoint, "kind" => kind)
        .increment(1);
}

/// Route-level middleware feeding `record_request`.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), &route, start);
    response
}
