use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use version_ctl_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    ///
    /// An absent file maps to [`InfrastructureError::NotFound`]; every other
    /// failure to [`InfrastructureError::FileRead`].
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path).map(BufReader::new).map_err(|e| InfrastructureError::on_open(path, e))
    }

    /// Read the first line of `path` without its terminator.
    /// Returns `None` for an empty file.
    pub fn first_line(path: &Path) -> InfraResult<Option<String>> {
        let mut reader = Self::open_buffered(path)?;
        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(|source| read_error(path, source))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Reads lines while keeping at most `max` bytes of each in memory.
pub struct BoundedLines<R> {
    reader: R,
    max: usize,
    buf: Vec<u8>,
}

/// One line produced by [`BoundedLines`].
#[derive(Debug, PartialEq, Eq)]
pub enum BoundedLine<'a> {
    /// The line fit; terminator stripped.
    Fits(&'a [u8]),
    /// The line was longer than the cap; its content was discarded.
    TooLong,
}

impl<R: BufRead> BoundedLines<R> {
    pub fn new(reader: R, max: usize) -> Self {
        Self { reader, max, buf: Vec::with_capacity(max + 1) }
    }

    /// Advance to the next line. `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<BoundedLine<'_>>> {
        self.buf.clear();
        let mut saw_bytes = false;
        let mut overflow = false;
        // One spare byte so a trailing `\r` does not count against the cap.
        let keep = self.max + 1;

        loop {
            let (consumed, finished) = {
                let chunk = self.reader.fill_buf()?;
                if chunk.is_empty() {
                    break;
                }
                saw_bytes = true;
                let (body, consumed, finished) = match memchr::memchr(b'\n', chunk) {
                    Some(pos) => (&chunk[..pos], pos + 1, true),
                    None => (chunk, chunk.len(), false),
                };
                if !overflow {
                    if self.buf.len() + body.len() > keep {
                        overflow = true;
                        self.buf.clear();
                    } else {
                        self.buf.extend_from_slice(body);
                    }
                }
                (consumed, finished)
            };
            self.reader.consume(consumed);
            if finished {
                break;
            }
        }

        if !saw_bytes {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if overflow || self.buf.len() > self.max {
            return Ok(Some(BoundedLine::TooLong));
        }
        Ok(Some(BoundedLine::Fits(&self.buf)))
    }
}

pub(crate) fn read_error(path: &Path, source: io::Error) -> InfrastructureError {
    if source.kind() == io::ErrorKind::InvalidData {
        InfrastructureError::Malformed {
            path: path.to_path_buf(),
            details: "content is not valid UTF-8".into(),
        }
    } else {
        InfrastructureError::FileRead { path: path.to_path_buf(), source }
    }
}
