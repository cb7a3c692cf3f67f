//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: read current version, compute the next one, rotate backups, write both files
//! - [`dto`]: plan and outcome values crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{Outcome, UpdatePlan};
pub use orchestrator::{PersistenceOrchestrator, Stage};
