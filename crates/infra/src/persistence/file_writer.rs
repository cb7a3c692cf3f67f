// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use version_ctl_shared_kernel::{InfraResult, InfrastructureError};

/// How a representation is replaced on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate the file in place.
    #[default]
    Truncate,
    /// Write a sibling temp file, fsync it, then rename over the target.
    Atomic,
}

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Replace the contents of `path` with `data` using `mode`.
    pub fn write(path: &Path, data: &[u8], mode: WriteMode) -> InfraResult<()> {
        let result = match mode {
            WriteMode::Truncate => Self::truncate_write(path, data),
            WriteMode::Atomic => Self::atomic_write(path, data),
        };
        result.map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn truncate_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(data)?;
        w.flush()
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let tmp = temp_sibling(path)?;

        if let Err(e) = write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
                && let Ok(dir) = File::open(parent)
            {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(data)?;
    w.flush()?;
    w.get_ref().sync_all()
}

// PID + time nanos keeps the name unique without a retry loop.
fn temp_sibling(path: &Path) -> std::io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| std::io::Error::other("path has no file name"))?;
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_name = format!(".{}.{}.{}.tmp", name.to_string_lossy(), std::process::id(), nanos);
    Ok(path.with_file_name(tmp_name))
}
