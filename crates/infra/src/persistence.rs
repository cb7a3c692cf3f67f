//! Low-level file helpers shared by the codecs.

mod file_reader;
mod file_writer;

pub(crate) use file_reader::read_error;
pub use file_reader::{BoundedLine, BoundedLines, FileReader};
pub use file_writer::{FileWriter, WriteMode};
