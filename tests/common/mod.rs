// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// `version-ctl` with `-o <dir>` already applied.
pub fn version_ctl(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_version-ctl"));
    cmd.arg("-o").arg(dir);
    cmd
}

/// Temp workspace seeded with a marker file, if given.
pub fn workspace(marker: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(content) = marker {
        fs::write(dir.path().join("VERSION"), content).unwrap();
    }
    dir
}

pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}
