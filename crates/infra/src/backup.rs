// crates/infra/src/backup.rs
use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use version_ctl_shared_kernel::{InfraResult, InfrastructureError};

pub const BACKUP_SUFFIX: &str = ".old";

/// `VERSION` -> `VERSION.old`, `version.h` -> `version.h.old`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Keep exactly one backup generation for each of `paths`.
///
/// All existing backups are removed first, then every primary that exists is
/// renamed onto its backup slot. Absent primaries are skipped.
pub fn rotate(paths: &[PathBuf]) -> InfraResult<()> {
    for path in paths {
        let backup = backup_path(path);
        ignore_missing(fs::remove_file(&backup))
            .map_err(|source| fs_error("remove", &backup, source))?;
    }

    for path in paths {
        let backup = backup_path(path);
        match fs::rename(path, &backup) {
            Ok(()) => log::debug!("backed up {} to {}", path.display(), backup.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} absent, nothing to back up", path.display());
            }
            Err(source) => return Err(fs_error("rename", path, source)),
        }
    }
    Ok(())
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

fn fs_error(operation: &str, path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::FileSystemOperation {
        operation: operation.to_string(),
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_old_suffix() {
        assert_eq!(backup_path(Path::new("out/VERSION")), PathBuf::from("out/VERSION.old"));
        assert_eq!(backup_path(Path::new("version.h")), PathBuf::from("version.h.old"));
    }

    #[test]
    fn rotation_replaces_previous_generation() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("VERSION");
        let header = dir.path().join("version.h");
        fs::write(&marker, "2.0.0\n").unwrap();
        fs::write(backup_path(&marker), "1.0.0\n").unwrap();
        fs::write(backup_path(&header), "stale\n").unwrap();

        rotate(&[marker.clone(), header.clone()]).unwrap();

        assert!(!marker.exists());
        assert_eq!(fs::read_to_string(backup_path(&marker)).unwrap(), "2.0.0\n");
        // header primary was absent, so its stale backup is simply gone
        assert!(!backup_path(&header).exists());
    }

    #[test]
    fn rotation_with_nothing_present_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        rotate(&[dir.path().join("VERSION")]).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
