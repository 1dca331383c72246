//! Prometheus Metrics Definitions
//!
//! This module defines all Prometheus metrics exposed by the bonding exporter.
//!
//! # Metric Categories
//!
//! ## Bonding
//! - Configured slaves per bonding master
//! - Active (operstate `up`) slaves per bonding master
//!
//! ## Scrape Metadata
//! - Duration of each collector run
//! - Whether each collector run succeeded
//!
//! All metrics use the `node_` namespace prefix so they line up with the
//! series names produced by the Prometheus node exporter.
//!
//! Every [`MetricsCollector`] owns its own [`Registry`]. Nothing is registered
//! in the prometheus default registry, so separate instances never observe each
//! other's values.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

const NAMESPACE: &str = "node";

/// Metric sink shared by the collectors and the HTTP server
#[derive(Clone)]
pub struct MetricsCollector {
    registry: Arc<Registry>,

    // Bonding metrics
    pub bonding_slaves: Arc<GaugeVec>,
    pub bonding_slaves_active: Arc<GaugeVec>,

    // Scrape metadata
    pub scrape_collector_duration_seconds: Arc<GaugeVec>,
    pub scrape_collector_success: Arc<GaugeVec>,
}

impl MetricsCollector {
    pub fn new() -> crate::error::Result<Self> {
        let registry = Registry::new();

        let bonding_slaves = GaugeVec::new(
            Opts::new(
                "net_bonding_slaves",
                "Number of configured slaves per bonding interface.",
            )
            .namespace(NAMESPACE),
            &["master"],
        )?;

        let bonding_slaves_active = GaugeVec::new(
            Opts::new(
                "net_bonding_slaves_active",
                "Number of active slaves per bonding interface.",
            )
            .namespace(NAMESPACE),
            &["master"],
        )?;

        let scrape_collector_duration_seconds = GaugeVec::new(
            Opts::new(
                "collector_duration_seconds",
                "node_exporter: Duration of a collector scrape.",
            )
            .namespace(NAMESPACE)
            .subsystem("scrape"),
            &["collector"],
        )?;

        let scrape_collector_success = GaugeVec::new(
            Opts::new(
                "collector_success",
                "node_exporter: Whether a collector succeeded.",
            )
            .namespace(NAMESPACE)
            .subsystem("scrape"),
            &["collector"],
        )?;

        registry.register(Box::new(bonding_slaves.clone()))?;
        registry.register(Box::new(bonding_slaves_active.clone()))?;
        registry.register(Box::new(scrape_collector_duration_seconds.clone()))?;
        registry.register(Box::new(scrape_collector_success.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            bonding_slaves: Arc::new(bonding_slaves),
            bonding_slaves_active: Arc::new(bonding_slaves_active),
            scrape_collector_duration_seconds: Arc::new(scrape_collector_duration_seconds),
            scrape_collector_success: Arc::new(scrape_collector_success),
        })
    }

    /// Set a labeled gauge, overwriting any previous value for the label set
    pub fn set_gauge(&self, gauge: &GaugeVec, labels: &[&str], value: f64) {
        gauge.with_label_values(labels).set(value);
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
