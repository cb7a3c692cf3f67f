//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`repository`]: where the version lives on disk and how it is read, backed up and written
//!
//! The use case layer talks only to these traits, never to the filesystem directly.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod repository;

pub use repository::{Representation, VersionRepository};
