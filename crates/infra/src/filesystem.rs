// crates/infra/src/filesystem.rs
use std::path::PathBuf;

use version_ctl_domain::VersionValue;
use version_ctl_ports::{Representation, VersionRepository};
use version_ctl_shared_kernel::Result;

use crate::{backup, codec, persistence::WriteMode};

pub const DEFAULT_MARKER_NAME: &str = "VERSION";
pub const DEFAULT_HEADER_NAME: &str = "version.h";

/// Where the two representations live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayout {
    pub dir: PathBuf,
    pub marker_name: String,
    pub header_name: String,
}

impl FileLayout {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            marker_name: DEFAULT_MARKER_NAME.to_string(),
            header_name: DEFAULT_HEADER_NAME.to_string(),
        }
    }

    pub fn path(&self, repr: Representation) -> PathBuf {
        match repr {
            Representation::Marker => self.dir.join(&self.marker_name),
            Representation::Header => self.dir.join(&self.header_name),
        }
    }
}

/// [`VersionRepository`] backed by plain files in one directory.
#[derive(Debug, Clone)]
pub struct FsVersionRepository {
    layout: FileLayout,
    mode: WriteMode,
}

impl FsVersionRepository {
    pub fn new(layout: FileLayout, mode: WriteMode) -> Self {
        Self { layout, mode }
    }
}

impl VersionRepository for FsVersionRepository {
    fn location(&self, repr: Representation) -> PathBuf {
        self.layout.path(repr)
    }

    fn backup_location(&self, repr: Representation) -> PathBuf {
        backup::backup_path(&self.layout.path(repr))
    }

    fn read(&self, repr: Representation) -> Result<VersionValue> {
        Ok(codec::read(repr, &self.location(repr))?)
    }

    fn read_backup(&self, repr: Representation) -> Result<VersionValue> {
        Ok(codec::read(repr, &self.backup_location(repr))?)
    }

    fn rotate_backups(&self) -> Result<()> {
        let primaries: Vec<_> =
            Representation::ALL.into_iter().map(|r| self.location(r)).collect();
        Ok(backup::rotate(&primaries)?)
    }

    fn write(&self, repr: Representation, value: &VersionValue) -> Result<()> {
        Ok(codec::write(repr, &self.location(repr), value, self.mode)?)
    }
}
