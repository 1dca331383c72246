use std::collections::HashMap;

/// Slave counts of a single bonding master.
///
/// `active_slaves` never exceeds `configured_slaves`: every active slave is
/// also counted as configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondingMaster {
    /// Number of slave interfaces listed for the master
    pub configured_slaves: u32,
    /// Number of those slaves whose operstate is `up`
    pub active_slaves: u32,
}

impl BondingMaster {
    pub fn new(configured_slaves: u32, active_slaves: u32) -> Self {
        Self {
            configured_slaves,
            active_slaves,
        }
    }

    /// Counts one more slave, marking it active when `up` is set.
    pub fn record_slave(&mut self, up: bool) {
        self.configured_slaves += 1;
        if up {
            self.active_slaves += 1;
        }
    }
}

/// Bonding master name to its slave counts, as of one read.
pub type BondingStats = HashMap<String, BondingMaster>;
