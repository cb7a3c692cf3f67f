// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod backup;
pub mod codec;
pub mod filesystem;
pub mod persistence;

pub use filesystem::{FileLayout, FsVersionRepository};
pub use persistence::WriteMode;
