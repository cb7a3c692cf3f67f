// crates/domain/src/value_objects/field.rs
use std::{fmt, str::FromStr};

use version_ctl_shared_kernel::DomainError;

/// One component of a version, ordered from most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
    Extra,
}

impl VersionField {
    pub const ALL: [Self; 4] = [Self::Major, Self::Minor, Self::Patch, Self::Extra];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Extra => "extra",
        }
    }

    /// Fields that are zeroed when this one is raised.
    pub fn lower(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |f| *f > self)
    }
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VersionField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "extra" => Ok(Self::Extra),
            _ => Err(DomainError::InvalidField { name: s.to_string() }),
        }
    }
}
