//! Bonding Metrics Collector
//!
//! Exposes the number of configured and active slaves of Linux bonding
//! interfaces, read from sysfs.
//!
//! # Metrics Produced
//! - `node_net_bonding_slaves` - Number of configured slaves per bonding interface
//!   - Labels: master
//! - `node_net_bonding_slaves_active` - Number of active slaves per bonding interface
//!   - Labels: master
//!
//! Series are overwritten for every master present in the current read. A
//! master that disappears keeps its last values until the process restarts.

use super::Collector;
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::sysfs::{self, SYSFS_NET};
use std::path::{Path, PathBuf};

/// Registration name of the bonding collector
pub const NAME: &str = "bonding";

/// Collector for Linux bonding interface slave counts
#[derive(Debug, Clone)]
pub struct BondingCollector {
    root: PathBuf,
}

impl BondingCollector {
    /// Creates a collector reading from `/sys/class/net`
    pub fn new() -> Self {
        Self::with_root(SYSFS_NET)
    }

    /// Creates a collector reading from a custom network-class directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for BondingCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for BondingCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    /// Reads bonding state and sets both gauges for every master
    ///
    /// # Errors
    ///
    /// Returns the read error unchanged; no gauge is touched in that case.
    fn update(&self, metrics: &MetricsCollector) -> Result<()> {
        let stats = sysfs::read_bonding_stats(&self.root)?;

        for (master, counts) in &stats {
            metrics.set_gauge(
                &metrics.bonding_slaves,
                &[master.as_str()],
                f64::from(counts.configured_slaves),
            );
            metrics.set_gauge(
                &metrics.bonding_slaves_active,
                &[master.as_str()],
                f64::from(counts.active_slaves),
            );
        }

        Ok(())
    }
}

/// Factory registered under [`NAME`]
pub fn factory(config: &CollectorConfig) -> Result<Box<dyn Collector>> {
    Ok(Box::new(BondingCollector::with_root(config.sysfs_net_path.clone())))
}
