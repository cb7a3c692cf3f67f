// crates/usecase/src/dto.rs
use version_ctl_domain::VersionValue;
use version_ctl_ports::Representation;

/// Immutable knobs for one orchestrator pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Representation treated as the source of truth when reading.
    pub source: Representation,
    /// Start from `0.0.0` when the source file is absent.
    pub force: bool,
}

/// Result of a completed (or previewed) pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Version read before the change; `None` when the action did not read one.
    pub previous: Option<VersionValue>,
    pub next: VersionValue,
}
