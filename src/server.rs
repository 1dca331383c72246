//! HTTP Server and Metrics Collection
//!
//! This module implements the Prometheus exporter HTTP server and the metric collection loop.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Collection Loop**: Background task that periodically runs every enabled collector
//! - **State Management**: Shared state (config, metrics, collectors) using Arc for thread-safety
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Health check (200 if any collector succeeded last cycle, 503 otherwise).
//!   Reads [`HealthStatus`] only, so it never creates scrape series of its own.
//!
//! # Metrics Collection
//!
//! The collection loop runs every N seconds (configured via `scrape_interval_seconds`) and:
//! 1. Moves the cycle onto the blocking thread pool, since sysfs reads are synchronous
//! 2. Runs each collector in turn through [`collectors::execute`]
//! 3. Records `node_scrape_collector_success` and `node_scrape_collector_duration_seconds`
//!
//! # Error Handling
//!
//! A failing collector is logged as a warning and does not stop the loop or the other
//! collectors.

use crate::collectors::{self, CollectionStatus, Collector};
use crate::config::Config;
use crate::metrics::MetricsCollector;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{error, info, warn};

/// Outcome of one pass over all collectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl CollectionSummary {
    pub fn any_success(&self) -> bool {
        self.succeeded > 0
    }
}

/// Outcome of the most recent collection cycle, read by `/health`
///
/// Starts unhealthy until a cycle with at least one successful collector has
/// been recorded.
#[derive(Debug, Clone, Default)]
pub struct HealthStatus {
    healthy: Arc<AtomicBool>,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, summary: &CollectionSummary) {
        self.healthy.store(summary.any_success(), Ordering::Relaxed);
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
struct AppState {
    config: Config,
    metrics: MetricsCollector,
    collectors: Arc<Vec<Box<dyn Collector>>>,
    health: HealthStatus,
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let metrics = MetricsCollector::new()?;
    let collectors = collectors::default_registry().build(&config.collector)?;

    info!(
        "Enabled collectors: {}",
        collectors
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let state = AppState {
        config: config.clone(),
        metrics: metrics.clone(),
        collectors: Arc::new(collectors),
        health: HealthStatus::new(),
    };

    // Start background metrics collection
    let collection_state = state.clone();
    tokio::spawn(async move {
        collect_metrics_loop(collection_state).await;
    });

    // Build the router
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn collect_metrics_loop(state: AppState) {
    let mut ticker = interval(Duration::from_secs(
        state.config.collector.scrape_interval_seconds,
    ));

    loop {
        ticker.tick().await;

        let collectors = state.collectors.clone();
        let metrics = state.metrics.clone();
        let summary =
            match tokio::task::spawn_blocking(move || collect_all(&collectors, &metrics)).await {
                Ok(summary) => summary,
                Err(e) => {
                    error!("Collection task failed: {}", e);
                    CollectionSummary::default()
                }
            };

        if !summary.any_success() {
            warn!("No collector succeeded ({} failed)", summary.failed);
        }
        state.health.record(&summary);
    }
}

/// Runs every collector once, in order, and tallies the outcomes
pub fn collect_all(
    collectors: &[Box<dyn Collector>],
    metrics: &MetricsCollector,
) -> CollectionSummary {
    let mut summary = CollectionSummary::default();

    for collector in collectors {
        match collectors::execute(collector.as_ref(), metrics) {
            CollectionStatus::Success => summary.succeeded += 1,
            CollectionStatus::Failed => summary.failed += 1,
        }
    }

    summary
}

async fn root_handler() -> impl IntoResponse {
    r#"<html>
<head><title>Bonding Exporter</title></head>
<body>
<h1>Bonding Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.health.is_healthy() {
        (axum::http::StatusCode::OK, "OK")
    } else {
        (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            "No collector succeeded",
        )
    }
}
