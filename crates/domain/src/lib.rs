//! # Domain
//!
//! Version values and the rules for moving from one version to the next.
//!
//! - [`value_objects`]: [`VersionValue`] and [`VersionField`] with their textual forms
//! - [`transition`]: [`Action`] and how it derives the next version
//!
//! Nothing in this crate touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod transition;
pub mod value_objects;

pub use transition::Action;
pub use value_objects::{VersionField, VersionValue};
