//! Metrics Collectors
//!
//! This module contains the collector abstraction and the collectors shipped
//! with the exporter. Each collector reads one part of the system and updates
//! the corresponding Prometheus metrics on the shared [`MetricsCollector`].
//!
//! # Architecture
//!
//! Collectors follow a consistent pattern:
//! - Implement [`Collector`] with a stable name
//! - Read their source from scratch on every `update`, keeping no state
//! - Return the read error unchanged so the scheduler can report it
//!
//! Collectors are not registered implicitly. The composition root builds a
//! [`CollectorRegistry`] (see [`default_registry`]) and instantiates the
//! enabled ones from configuration.
//!
//! # Error Handling
//!
//! Individual collector failures are non-fatal: [`execute`] logs a warning,
//! records `node_scrape_collector_success{collector} 0` and returns
//! [`CollectionStatus::Failed`].

use crate::config::CollectorConfig;
use crate::error::{ExporterError, Result};
use crate::metrics::MetricsCollector;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, warn};

/// A named unit that refreshes a set of metrics once per collection cycle
pub trait Collector: Send + Sync {
    /// Name used for registration and for the `collector` scrape label
    fn name(&self) -> &'static str;

    /// Reads current state and writes it into `metrics`
    fn update(&self, metrics: &MetricsCollector) -> Result<()>;
}

/// Builds a collector from configuration
pub type CollectorFactory = fn(&CollectorConfig) -> Result<Box<dyn Collector>>;

/// Status of a metrics collection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Metrics were successfully collected and updated
    Success,
    /// Collection failed but is non-fatal (already logged as warning)
    Failed,
}

/// Named collector factories, assembled explicitly by the caller
#[derive(Default, Clone)]
pub struct CollectorRegistry {
    factories: BTreeMap<&'static str, CollectorFactory>,
}

impl CollectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a factory under `name`, replacing any factory already registered
    pub fn register(&mut self, name: &'static str, factory: CollectorFactory) -> &mut Self {
        self.factories.insert(name, factory);
        self
    }

    /// Registered collector names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Instantiates every collector listed in `config.enabled`, in that order
    ///
    /// # Errors
    ///
    /// Returns [`ExporterError::UnknownCollector`] for a name that has no
    /// registered factory, or the factory's own error.
    pub fn build(&self, config: &CollectorConfig) -> Result<Vec<Box<dyn Collector>>> {
        config
            .enabled
            .iter()
            .map(|name| {
                let factory = self
                    .factories
                    .get(name.as_str())
                    .ok_or_else(|| ExporterError::UnknownCollector(name.clone()))?;
                factory(config)
            })
            .collect()
    }
}

/// Registry containing every collector shipped with the exporter
pub fn default_registry() -> CollectorRegistry {
    let mut registry = CollectorRegistry::new();
    registry.register(bonding::NAME, bonding::factory);
    registry
}

/// Runs one collector and records its scrape duration and outcome
///
/// # Arguments
///
/// * `collector` - Collector to run
/// * `metrics` - Metrics sink the collector writes into
///
/// # Returns
///
/// * `CollectionStatus::Success` - The collector updated its metrics
/// * `CollectionStatus::Failed` - The collector returned an error (logged as warning)
pub fn execute(collector: &dyn Collector, metrics: &MetricsCollector) -> CollectionStatus {
    let name = collector.name();
    let start = Instant::now();
    let result = collector.update(metrics);

    metrics.set_gauge(
        &metrics.scrape_collector_duration_seconds,
        &[name],
        start.elapsed().as_secs_f64(),
    );

    match result {
        Ok(()) => {
            metrics.set_gauge(&metrics.scrape_collector_success, &[name], 1.0);
            info!("Updated {} metrics", name);
            CollectionStatus::Success
        }
        Err(e) => {
            metrics.set_gauge(&metrics.scrape_collector_success, &[name], 0.0);
            warn!("Failed to collect {}: {}", name, e);
            CollectionStatus::Failed
        }
    }
}

// Collector modules
pub mod bonding;

pub use bonding::BondingCollector;
