// crates/infra/src/codec/marker.rs
use std::path::Path;

use version_ctl_domain::VersionValue;
use version_ctl_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::{FileReader, FileWriter, WriteMode};

/// Parse the first line of the marker file. Anything after it is ignored.
pub fn read(path: &Path) -> InfraResult<VersionValue> {
    let line = FileReader::first_line(path)?.ok_or_else(|| InfrastructureError::Malformed {
        path: path.to_path_buf(),
        details: "file is empty".into(),
    })?;

    VersionValue::parse(&line).map_err(|e| InfrastructureError::Malformed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

pub fn render(value: &VersionValue) -> String {
    format!("{value}\n")
}

pub fn write(path: &Path, value: &VersionValue, mode: WriteMode) -> InfraResult<()> {
    FileWriter::write(path, render(value).as_bytes(), mode)
}
