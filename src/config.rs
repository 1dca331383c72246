use crate::error::ExporterError;
use crate::sysfs::SYSFS_NET;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectorConfig {
    #[serde(default = "default_scrape_interval")]
    pub scrape_interval_seconds: u64,
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
    #[serde(default = "default_sysfs_net_path")]
    pub sysfs_net_path: PathBuf,
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9100
}

fn default_scrape_interval() -> u64 {
    15
}

fn default_enabled() -> Vec<String> {
    vec!["bonding".to_string()]
}

fn default_sysfs_net_path() -> PathBuf {
    PathBuf::from(SYSFS_NET)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            scrape_interval_seconds: default_scrape_interval(),
            enabled: default_enabled(),
            sysfs_net_path: default_sysfs_net_path(),
        }
    }
}

impl CollectorConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|enabled| enabled == name)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BONDING_EXPORTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("collector.enabled")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the collection loop cannot run with
    pub fn validate(&self) -> std::result::Result<(), ExporterError> {
        if self.collector.scrape_interval_seconds == 0 {
            return Err(ExporterError::Config(
                "scrape_interval_seconds must be greater than zero".to_string(),
            ));
        }
        if self.collector.enabled.is_empty() {
            return Err(ExporterError::Config(
                "at least one collector must be enabled".to_string(),
            ));
        }
        Ok(())
    }
}
