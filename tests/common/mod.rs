//! Synthetic sysfs trees for tests
#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out like `/sys/class/net`
pub struct SysfsTree {
    dir: TempDir,
}

impl SysfsTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn masters(&self, content: &str) -> &Self {
        self.write("bonding_masters", content)
    }

    pub fn slaves(&self, master: &str, content: &str) -> &Self {
        self.write(&format!("{master}/bonding/slaves"), content)
    }

    pub fn lower_operstate(&self, master: &str, slave: &str, state: &str) -> &Self {
        self.write(&format!("{master}/lower_{slave}/operstate"), state)
    }

    pub fn slave_operstate(&self, master: &str, slave: &str, state: &str) -> &Self {
        self.write(&format!("{master}/slave_{slave}/operstate"), state)
    }

    pub fn remove(&self, relative: &str) -> &Self {
        fs::remove_file(self.path(relative)).expect("Failed to remove file");
        self
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Writes raw bytes at a raw relative path, for names and contents that
    /// are not valid UTF-8
    pub fn write_bytes(&self, relative: &[u8], content: &[u8]) -> &Self {
        let path = self.dir.path().join(OsStr::from_bytes(relative));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).expect("Failed to create dir");
        self
    }
}

/// The tree used throughout the tests: bond0 with one up and one down
/// slave, bond1 with no slaves.
pub fn two_bond_tree() -> SysfsTree {
    let tree = SysfsTree::new();
    tree.masters("bond0 bond1\n")
        .slaves("bond0", "eth0 eth1\n")
        .lower_operstate("bond0", "eth0", "up\n")
        .lower_operstate("bond0", "eth1", "down\n")
        .slaves("bond1", "");
    tree
}
