// src/exit.rs
use std::process::ExitCode;
use version_ctl_shared_kernel::{ErrorKind, VersionCtlError};

/// File I/O or consistency failure while persisting.
pub const PERSISTENCE_FAILURE: u8 = 1;
/// Bad literal, unknown field, or other argument problem (same code clap uses).
pub const USAGE_ERROR: u8 = 2;

pub fn code_for(err: &VersionCtlError) -> ExitCode {
    match err.kind() {
        ErrorKind::Usage => ExitCode::from(USAGE_ERROR),
        ErrorKind::Persistence => ExitCode::from(PERSISTENCE_FAILURE),
    }
}
