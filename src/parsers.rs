// src/parsers.rs
use std::path::{Component, Path, PathBuf};

/// Accept only a path that names an existing directory.
pub fn existing_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("Invalid path given (not a directory): {s}"))
    }
}

/// Accept a bare file name: no separators, not `.`/`..`.
pub fn file_name(s: &str) -> Result<String, String> {
    let mut components = Path::new(s).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(s.to_string()),
        _ => Err(format!("Expected a plain file name, got: {s}")),
    }
}
