pub mod bonding;
pub mod types;

pub use bonding::read_bonding_stats;
pub use types::{BondingMaster, BondingStats};

/// Conventional mount point of the network-class sysfs directory.
pub const SYSFS_NET: &str = "/sys/class/net";
