// crates/ports/src/repository.rs
use std::{fmt, path::PathBuf};

use version_ctl_domain::VersionValue;
use version_ctl_shared_kernel::Result;

/// The two on-disk forms a version is kept in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Plain `major.minor.patch[-extra]` marker file.
    #[default]
    Marker,
    /// Generated header with `#define VERSION...` macros.
    Header,
}

impl Representation {
    /// Write order: marker first, header second.
    pub const ALL: [Self; 2] = [Self::Marker, Self::Header];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Port for loading and storing the version in both representations.
///
/// Read errors must keep "file absent" distinguishable from "file corrupt"
/// (see `VersionCtlError::is_not_found`) so callers can apply force semantics.
pub trait VersionRepository {
    /// Path of the primary file for `repr`, used in diagnostics.
    fn location(&self, repr: Representation) -> PathBuf;

    /// Path of the single `.old` backup for `repr`.
    fn backup_location(&self, repr: Representation) -> PathBuf;

    fn read(&self, repr: Representation) -> Result<VersionValue>;

    fn read_backup(&self, repr: Representation) -> Result<VersionValue>;

    /// Drop existing backups and move every present primary to its backup slot.
    fn rotate_backups(&self) -> Result<()>;

    fn write(&self, repr: Representation, value: &VersionValue) -> Result<()>;
}
