use std::fmt;

use version_ctl_domain::{Action, VersionValue};
use version_ctl_ports::{Representation, VersionRepository};
use version_ctl_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::{Outcome, UpdatePlan};

/// Steps of one pass, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ReadCurrent,
    Compute,
    RotateBackups,
    WriteNew,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ReadCurrent => "read-current",
            Self::Compute => "compute",
            Self::RotateBackups => "rotate-backups",
            Self::WriteNew => "write-new",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Sequences read, compute, backup and write across both representations.
pub struct PersistenceOrchestrator<'a> {
    repository: &'a dyn VersionRepository,
    plan: UpdatePlan,
}

impl<'a> PersistenceOrchestrator<'a> {
    pub fn new(repository: &'a dyn VersionRepository, plan: UpdatePlan) -> Self {
        Self { repository, plan }
    }

    /// Run a full pass and persist the result to both representations.
    ///
    /// # Errors
    ///
    /// Fails on a missing source without force, a malformed source, an
    /// invalid transition, or any filesystem error. A failure after the
    /// marker file was written is reported as [`ApplicationError::PartialWrite`].
    pub fn run(&self, action: &Action) -> Result<Outcome> {
        let outcome = self.preview(action)?;

        if matches!(action, Action::Restore) {
            log::debug!("{}: backups kept in place for restore", Stage::RotateBackups);
        } else {
            enter(Stage::RotateBackups);
            self.repository.rotate_backups().context("rotating backups")?;
        }

        enter(Stage::WriteNew);
        self.write_all(&outcome.next)?;

        enter(Stage::Done);
        log::info!("{} -> {}", action.name(), outcome.next);
        Ok(outcome)
    }

    /// Read and compute only; nothing on disk changes.
    pub fn preview(&self, action: &Action) -> Result<Outcome> {
        enter(Stage::Idle);
        let previous = if action.reads_current() {
            enter(Stage::ReadCurrent);
            self.read_source(matches!(action, Action::Restore))?
        } else {
            log::debug!(
                "{}: skipped, {} carries the full version",
                Stage::ReadCurrent,
                action.name()
            );
            None
        };

        enter(Stage::Compute);
        let next = action
            .apply(previous.unwrap_or_default())
            .with_context(|| format!("computing {}", action.name()))?;

        Ok(Outcome { previous, next })
    }

    /// Current version of the source representation, honouring `force`.
    pub fn current(&self) -> Result<Option<VersionValue>> {
        self.read_source(false)
    }

    fn read_source(&self, from_backup: bool) -> Result<Option<VersionValue>> {
        let source = self.plan.source;
        let (result, path) = if from_backup {
            (self.repository.read_backup(source), self.repository.backup_location(source))
        } else {
            (self.repository.read(source), self.repository.location(source))
        };

        match result {
            Ok(value) => {
                log::debug!("read {value} from {}", path.display());
                Ok(Some(value))
            }
            Err(err) if err.is_not_found() && self.plan.force => {
                log::warn!(
                    "{} does not exist, starting from {}",
                    path.display(),
                    VersionValue::default()
                );
                Ok(None)
            }
            Err(err) if err.is_not_found() => Err(ApplicationError::SourceNotFound { path }.into()),
            Err(err) => Err(err).with_context(|| format!("reading {} version", source)),
        }
    }

    fn write_all(&self, value: &VersionValue) -> Result<()> {
        let mut written = None;
        for repr in Representation::ALL {
            match self.repository.write(repr, value) {
                Ok(()) => {
                    log::debug!("wrote {value} to {}", self.repository.location(repr).display());
                    written = written.or(Some(repr));
                }
                Err(err) => {
                    return Err(match written {
                        Some(done) => ApplicationError::PartialWrite {
                            written: self.repository.location(done),
                            failed: self.repository.location(repr),
                            source: Box::new(err),
                        }
                        .into(),
                        None => err,
                    });
                }
            }
        }
        Ok(())
    }
}

fn enter(stage: Stage) {
    log::debug!("stage: {stage}");
}
