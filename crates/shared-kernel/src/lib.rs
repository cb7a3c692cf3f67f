// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, ErrorKind, InfraResult,
    InfrastructureError, Result, VersionCtlError,
};

pub mod error;
