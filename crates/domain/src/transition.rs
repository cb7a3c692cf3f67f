// crates/domain/src/transition.rs
use version_ctl_shared_kernel::DomainResult;

use crate::value_objects::{VersionField, VersionValue};

/// What an invocation asks to happen to the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the version with a literal.
    Set(VersionValue),
    /// Bump one field and zero the fields after it.
    Raise(VersionField),
    /// Put the backed-up version back in place.
    Restore,
}

impl Action {
    pub fn set(literal: &str) -> DomainResult<Self> {
        VersionValue::parse(literal).map(Self::Set)
    }

    pub fn raise(field: &str) -> DomainResult<Self> {
        field.parse().map(Self::Raise)
    }

    /// `Set` carries its whole result; everything else starts from a stored version.
    pub const fn reads_current(&self) -> bool {
        !matches!(self, Self::Set(_))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Set(_) => "set",
            Self::Raise(_) => "raise",
            Self::Restore => "reset",
        }
    }

    /// Derive the next version from `current`.
    ///
    /// For `Restore`, `current` is the version read back from the backup.
    pub fn apply(&self, current: VersionValue) -> DomainResult<VersionValue> {
        match self {
            Self::Set(literal) => Ok(*literal),
            Self::Raise(field) => current.raise(*field),
            Self::Restore => Ok(current),
        }
    }
}
