// crates/infra/src/codec/header.rs
use std::{fmt::Write as _, path::Path, sync::OnceLock};

use regex::Regex;
use version_ctl_domain::VersionValue;
use version_ctl_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::{BoundedLine, BoundedLines, FileReader, FileWriter, WriteMode, read_error};

/// Lines longer than this are skipped without being matched.
///
/// Must stay above the longest `#define VERSION` line [`render`] emits
/// (four `u64::MAX` fields come to 101 bytes).
pub const MAX_LINE_LEN: usize = 128;

fn define_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*#define\s+VERSION\s+"([0-9][^"\s]*)"\s*$"#)
            .expect("define pattern compiles")
    })
}

/// Parse a single `#define VERSION "..."` line, if it is one.
pub fn parse_define(line: &str) -> Option<VersionValue> {
    let caps = define_pattern().captures(line)?;
    VersionValue::parse(caps.get(1)?.as_str()).ok()
}

/// Scan the header for the first `#define VERSION "..."` line.
pub fn read(path: &Path) -> InfraResult<VersionValue> {
    let reader = FileReader::open_buffered(path)?;
    let mut lines = BoundedLines::new(reader, MAX_LINE_LEN);

    while let Some(line) = lines.next_line().map_err(|e| read_error(path, e))? {
        let BoundedLine::Fits(bytes) = line else {
            continue;
        };
        if let Some(value) = std::str::from_utf8(bytes).ok().and_then(parse_define) {
            return Ok(value);
        }
    }

    Err(InfrastructureError::Malformed {
        path: path.to_path_buf(),
        details: "no `#define VERSION \"major.minor.patch[-extra]\"` line found".into(),
    })
}

pub fn render(value: &VersionValue) -> String {
    let mut out = format!("#define VERSION \"{value}\"\n");
    for (name, number) in [
        ("MAJOR", value.major),
        ("MINOR", value.minor),
        ("PATCH", value.patch),
        ("EXTRA", value.extra),
    ] {
        let _ = writeln!(out, "#define VERSION_{name} {number}");
    }
    out
}

pub fn write(path: &Path, value: &VersionValue, mode: WriteMode) -> InfraResult<()> {
    FileWriter::write(path, render(value).as_bytes(), mode)
}
