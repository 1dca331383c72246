//! Bonding Interface Reader
//!
//! Walks the network-class sysfs tree and counts the configured and active
//! slaves of every bonding master.
//!
//! # Layout
//!
//! ```text
//! <root>/bonding_masters                  "bond0 bond1"
//! <root>/<master>/bonding/slaves          "eth0 eth1"
//! <root>/<master>/lower_<slave>/operstate "up"
//! <root>/<master>/slave_<slave>/operstate "up"   (older kernels)
//! ```
//!
//! Any read failure aborts the whole walk. Callers never see a partial map.

use super::types::{BondingMaster, BondingStats};
use crate::error::{ExporterError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

const OPERSTATE_UP: &[u8] = b"up";

/// Reads slave counts for all bonding masters under `root`.
///
/// File contents are handled as raw bytes: interface names are not required
/// to be UTF-8, and an operstate that is not valid UTF-8 simply isn't `up`.
/// Master names become map keys through lossy UTF-8 conversion.
///
/// # Arguments
///
/// * `root` - Network-class directory, normally `/sys/class/net`
///
/// # Errors
///
/// Returns [`ExporterError::Read`] if `bonding_masters`, a slave list or a
/// slave operstate cannot be read. A missing `bonding_masters` file means
/// bonding is not available on this host.
pub fn read_bonding_stats(root: &Path) -> Result<BondingStats> {
    let masters = read_file(&root.join("bonding_masters"))?;

    let mut stats = BondingStats::new();
    for master in fields(&masters) {
        let master_dir = root.join(OsStr::from_bytes(master));
        let slaves = read_file(&master_dir.join("bonding").join("slaves"))?;

        let mut counts = BondingMaster::default();
        for slave in fields(&slaves) {
            let state = read_slave_operstate(&master_dir, slave)?;
            counts.record_slave(state.trim_ascii() == OPERSTATE_UP);
        }
        stats.insert(String::from_utf8_lossy(master).into_owned(), counts);
    }

    Ok(stats)
}

/// Reads `lower_<slave>/operstate`, falling back to `slave_<slave>/operstate`
/// only when the first path does not exist.
fn read_slave_operstate(master_dir: &Path, slave: &[u8]) -> Result<Vec<u8>> {
    match read_file(&master_dir.join(prefixed("lower_", slave)).join("operstate")) {
        Err(e) if e.is_not_found() => {
            read_file(&master_dir.join(prefixed("slave_", slave)).join("operstate"))
        }
        other => other,
    }
}

/// Whitespace-separated, non-empty fields of a sysfs list file
fn fields(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split(u8::is_ascii_whitespace)
        .filter(|field| !field.is_empty())
}

fn prefixed(prefix: &str, name: &[u8]) -> OsString {
    let mut entry = OsString::from(prefix);
    entry.push(OsStr::from_bytes(name));
    entry
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ExporterError::read(path, e))
}
