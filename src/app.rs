// src/app.rs
use crate::config::{Config, Task};
use std::fmt;
use version_ctl_domain::VersionValue;
use version_ctl_infra::FsVersionRepository;
use version_ctl_shared_kernel::Result;
use version_ctl_usecase::PersistenceOrchestrator;

/// What gets printed on stdout after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Both files now hold this version.
    Updated(VersionValue),
    /// Dry run: nothing was written.
    Preview { previous: Option<VersionValue>, next: VersionValue },
    Current(VersionValue),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated(v) | Self::Current(v) => write!(f, "{v}"),
            Self::Preview { previous: Some(prev), next } => write!(f, "{prev} -> {next}"),
            Self::Preview { previous: None, next } => write!(f, "none -> {next}"),
        }
    }
}

pub fn run(config: &Config) -> Result<Report> {
    let repository = FsVersionRepository::new(config.layout.clone(), config.write_mode);
    let orchestrator = PersistenceOrchestrator::new(&repository, config.plan);

    match config.task {
        Task::Show => Ok(Report::Current(orchestrator.current()?.unwrap_or_default())),
        Task::Apply(action) if config.dry_run => {
            let outcome = orchestrator.preview(&action)?;
            Ok(Report::Preview { previous: outcome.previous, next: outcome.next })
        }
        Task::Apply(action) => {
            orchestrator.run(&action).map(|outcome| Report::Updated(outcome.next))
        }
    }
}
