//! Readers and writers for the two version representations.
//!
//! The set of representations is closed, so dispatch is a `match` on
//! [`Representation`] rather than a trait object.

pub mod header;
pub mod marker;

use std::path::Path;

use version_ctl_domain::VersionValue;
use version_ctl_ports::Representation;
use version_ctl_shared_kernel::InfraResult;

use crate::persistence::WriteMode;

pub fn read(repr: Representation, path: &Path) -> InfraResult<VersionValue> {
    match repr {
        Representation::Marker => marker::read(path),
        Representation::Header => header::read(path),
    }
}

pub fn write(
    repr: Representation,
    path: &Path,
    value: &VersionValue,
    mode: WriteMode,
) -> InfraResult<()> {
    match repr {
        Representation::Marker => marker::write(path, value, mode),
        Representation::Header => header::write(path, value, mode),
    }
}
