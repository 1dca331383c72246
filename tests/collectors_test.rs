//! Collector registry and execution tests

mod common;

use bonding_exporter::collectors::{
    default_registry, execute, CollectionStatus, Collector, CollectorRegistry,
};
use bonding_exporter::config::CollectorConfig;
use bonding_exporter::error::{ExporterError, Result};
use bonding_exporter::metrics::MetricsCollector;
use common::{two_bond_tree, SysfsTree};

fn create_test_metrics() -> MetricsCollector {
    MetricsCollector::new().expect("Failed to create test metrics")
}

fn collector_config(root: &std::path::Path, enabled: &[&str]) -> CollectorConfig {
    CollectorConfig {
        enabled: enabled.iter().map(|name| name.to_string()).collect(),
        sysfs_net_path: root.to_path_buf(),
        ..CollectorConfig::default()
    }
}

struct FailingCollector;

impl Collector for FailingCollector {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn update(&self, _metrics: &MetricsCollector) -> Result<()> {
        Err(ExporterError::Config("Test error".to_string()))
    }
}

fn failing_factory(_config: &CollectorConfig) -> Result<Box<dyn Collector>> {
    Ok(Box::new(FailingCollector))
}

#[test]
fn test_default_registry_contains_bonding() {
    let registry = default_registry();

    assert_eq!(registry.names(), vec!["bonding"]);
}

#[test]
fn test_build_instantiates_enabled_collectors() {
    // Given: The default registry and a config enabling bonding
    let tree = two_bond_tree();
    let config = collector_config(tree.root(), &["bonding"]);

    // When: Building collectors
    let collectors = default_registry().build(&config).expect("Build failed");

    // Then: One bonding collector reading from the configured root
    assert_eq!(collectors.len(), 1);
    assert_eq!(collectors[0].name(), "bonding");

    let metrics = create_test_metrics();
    collectors[0].update(&metrics).expect("Update failed");
    assert_eq!(
        metrics.bonding_slaves.with_label_values(&["bond0"]).get(),
        2.0
    );
}

#[test]
fn test_build_rejects_unknown_collector() {
    let config = collector_config(std::path::Path::new("/nonexistent"), &["bonding", "wifi"]);

    let result = default_registry().build(&config);

    match result {
        Err(ExporterError::UnknownCollector(name)) => assert_eq!(name, "wifi"),
        Err(other) => panic!("Unexpected error: {other}"),
        Ok(_) => panic!("Unknown collector should be rejected"),
    }
}

#[test]
fn test_build_preserves_enabled_order() {
    let mut registry = default_registry();
    registry.register("failing", failing_factory);
    let config = collector_config(std::path::Path::new("/nonexistent"), &["failing", "bonding"]);

    let names: Vec<_> = registry
        .build(&config)
        .unwrap()
        .iter()
        .map(|c| c.name())
        .collect();

    assert_eq!(names, vec!["failing", "bonding"]);
    assert_eq!(registry.names(), vec!["bonding", "failing"]);
}

#[test]
fn test_register_replaces_existing_factory() {
    let mut registry = CollectorRegistry::new();
    registry
        .register("bonding", failing_factory)
        .register("bonding", failing_factory);

    assert_eq!(registry.names(), vec!["bonding"]);
}

#[test]
fn test_empty_registry_builds_nothing_for_empty_list() {
    let registry = CollectorRegistry::new();
    let config = collector_config(std::path::Path::new("/nonexistent"), &[]);

    let collectors = registry.build(&config).unwrap();

    assert!(collectors.is_empty());
}

#[test]
fn test_execute_records_success() {
    // Given: A working bonding collector
    let tree = two_bond_tree();
    let config = collector_config(tree.root(), &["bonding"]);
    let collectors = default_registry().build(&config).unwrap();
    let metrics = create_test_metrics();

    // When: Executing it
    let status = execute(collectors[0].as_ref(), &metrics);

    // Then: Success is recorded along with a duration
    assert_eq!(status, CollectionStatus::Success);
    assert_eq!(
        metrics
            .scrape_collector_success
            .with_label_values(&["bonding"])
            .get(),
        1.0
    );
    assert!(
        metrics
            .scrape_collector_duration_seconds
            .with_label_values(&["bonding"])
            .get()
            >= 0.0
    );
}

#[test]
fn test_execute_records_failure_without_panicking() {
    // Given: A bonding collector pointed at a tree without bonding
    let tree = SysfsTree::new();
    let config = collector_config(tree.root(), &["bonding"]);
    let collectors = default_registry().build(&config).unwrap();
    let metrics = create_test_metrics();

    // When: Executing it
    let status = execute(collectors[0].as_ref(), &metrics);

    // Then: Failure is reported as a status, not an error
    assert_eq!(status, CollectionStatus::Failed);
    assert_eq!(
        metrics
            .scrape_collector_success
            .with_label_values(&["bonding"])
            .get(),
        0.0
    );
    let rendered = metrics.render().unwrap();
    assert!(rendered.contains("node_scrape_collector_success{collector=\"bonding\"} 0"));
    assert!(rendered.contains("node_scrape_collector_duration_seconds{collector=\"bonding\"}"));
}

#[test]
fn test_execute_success_after_failure_flips_status() {
    let tree = SysfsTree::new();
    let config = collector_config(tree.root(), &["bonding"]);
    let collectors = default_registry().build(&config).unwrap();
    let metrics = create_test_metrics();

    assert_eq!(execute(collectors[0].as_ref(), &metrics), CollectionStatus::Failed);

    tree.masters("bond0").slaves("bond0", "");
    assert_eq!(execute(collectors[0].as_ref(), &metrics), CollectionStatus::Success);
    assert_eq!(
        metrics
            .scrape_collector_success
            .with_label_values(&["bonding"])
            .get(),
        1.0
    );
}
