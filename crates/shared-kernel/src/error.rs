// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VersionCtlError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VersionCtlError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, VersionCtlError>;

/// Coarse classification used by the binary to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input on the command line: literal, field name, overflow.
    Usage,
    /// Anything that went wrong while reading, rotating or writing files.
    Persistence,
}

impl VersionCtlError {
    /// Strip `Context` wrappers and return the innermost error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::Domain(_) => ErrorKind::Usage,
            _ => ErrorKind::Persistence,
        }
    }

    /// True when the underlying failure is an absent file, as opposed to a
    /// corrupt one or a permission problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::NotFound { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid version '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid field '{name}' (expected one of major, minor, patch, extra)")]
    InvalidField { name: String },

    #[error("Cannot raise {field}: value is already at its maximum")]
    FieldOverflow { field: String },

    #[error("Marker and header cannot share the file name '{name}'")]
    SharedFileName { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Version source '{path}' does not exist (use --force to start from 0.0.0)")]
    SourceNotFound { path: PathBuf },

    #[error(
        "Wrote '{written}' but failed to write '{failed}'; the two files may now disagree: {source}"
    )]
    PartialWrite {
        written: PathBuf,
        failed: PathBuf,
        #[source]
        source: Box<VersionCtlError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("File '{path}' is malformed: {details}")]
    Malformed { path: PathBuf, details: String },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    /// Classify an error raised while opening `path` for reading.
    pub fn on_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<VersionCtlError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VersionCtlError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VersionCtlError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
