//! Value objects describing a project version.

pub mod field;
pub mod version;

pub use field::VersionField;
pub use version::VersionValue;
