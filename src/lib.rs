//! Linux Bonding Prometheus Exporter
//!
//! A Prometheus metrics exporter for Linux bonding ("link aggregation")
//! interfaces, modelled on the node exporter's bonding collector.
//!
//! # Overview
//!
//! The exporter walks the network-class sysfs tree, counts the configured and
//! active slaves of every bonding master, and exposes both counts as gauges
//! labelled by master name.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                 ┌──────────────────────┐
//! │ /sys/class/net  │ ◄─────────────  │       Exporter       │
//! │ bonding_masters │   file reads    │  ┌────────────────┐  │      HTTP      ┌────────────┐
//! │ <bond>/...      │                 │  │ BondingReader  │  │ ◄────────────► │ Prometheus │
//! └─────────────────┘                 │  └────────────────┘  │   /metrics     └────────────┘
//!                                     │  ┌────────────────┐  │
//!                                     │  │   Collectors   │  │
//!                                     │  └────────────────┘  │
//!                                     └──────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sysfs`] - Bonding state reader and its types
//! - [`collectors`] - Collector trait, registry, and the bonding collector
//! - [`metrics`] - Prometheus metric definitions
//! - [`server`] - HTTP server and collection loop
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use bonding_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod sysfs;
