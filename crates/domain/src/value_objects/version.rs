// crates/domain/src/value_objects/version.rs
use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use version_ctl_shared_kernel::{DomainError, DomainResult};

use super::VersionField;

/// A project version: `major.minor.patch[-extra]`.
///
/// `extra == 0` means "no extra part" and is left out when formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VersionValue {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: u64,
}

fn literal_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)(?:\.([0-9]+)(?:\.([0-9]+)(?:-([0-9]+))?)?)?$")
            .expect("version pattern compiles")
    })
}

impl VersionValue {
    pub const fn new(major: u64, minor: u64, patch: u64, extra: u64) -> Self {
        Self { major, minor, patch, extra }
    }

    /// Parse `major[.minor[.patch[-extra]]]`, surrounding whitespace ignored.
    /// Omitted fields are zero.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        let caps = literal_pattern().captures(trimmed).ok_or_else(|| DomainError::Parse {
            input: input.to_string(),
            reason: "expected major[.minor[.patch[-extra]]]".into(),
        })?;

        let mut value = Self::default();
        for (idx, field) in VersionField::ALL.into_iter().enumerate() {
            if let Some(digits) = caps.get(idx + 1) {
                let number = digits.as_str().parse::<u64>().map_err(|_| DomainError::Parse {
                    input: input.to_string(),
                    reason: format!("{field} is larger than {}", u64::MAX),
                })?;
                value.set(field, number);
            }
        }
        Ok(value)
    }

    pub const fn get(&self, field: VersionField) -> u64 {
        match field {
            VersionField::Major => self.major,
            VersionField::Minor => self.minor,
            VersionField::Patch => self.patch,
            VersionField::Extra => self.extra,
        }
    }

    fn set(&mut self, field: VersionField, value: u64) {
        match field {
            VersionField::Major => self.major = value,
            VersionField::Minor => self.minor = value,
            VersionField::Patch => self.patch = value,
            VersionField::Extra => self.extra = value,
        }
    }

    /// Increment `field` and zero every less significant field.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::FieldOverflow`] when `field` is already `u64::MAX`.
    pub fn raise(&self, field: VersionField) -> DomainResult<Self> {
        let bumped = self
            .get(field)
            .checked_add(1)
            .ok_or_else(|| DomainError::FieldOverflow { field: field.to_string() })?;

        let mut next = *self;
        next.set(field, bumped);
        for lower in field.lower() {
            next.set(lower, 0);
        }
        Ok(next)
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.extra > 0 {
            write!(f, "-{}", self.extra)?;
        }
        Ok(())
    }
}

impl FromStr for VersionValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
