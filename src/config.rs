// src/config.rs
use crate::args::{Args, Command, LogOptions};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use version_ctl_domain::Action;
use version_ctl_infra::{FileLayout, WriteMode};
use version_ctl_shared_kernel::DomainError;
use version_ctl_usecase::UpdatePlan;

/// What one invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Apply(Action),
    Show,
}

/// Resolved, immutable settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub task: Task,
    pub layout: FileLayout,
    pub plan: UpdatePlan,
    pub write_mode: WriteMode,
    pub dry_run: bool,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = DomainError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let task = match &args.command {
            Command::Set { literal } => Task::Apply(Action::set(literal)?),
            Command::Raise { field } => Task::Apply(Action::raise(field)?),
            Command::Reset => Task::Apply(Action::Restore),
            Command::Show => Task::Show,
        };

        let files = args.files;
        if files.marker_name == files.header_name {
            return Err(DomainError::SharedFileName { name: files.marker_name });
        }
        let layout = FileLayout {
            dir: files.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            marker_name: files.marker_name,
            header_name: files.header_name,
        };

        let plan = UpdatePlan { source: files.source.into(), force: args.behavior.force };
        let write_mode =
            if args.behavior.atomic { WriteMode::Atomic } else { WriteMode::Truncate };

        Ok(Self {
            task,
            layout,
            plan,
            write_mode,
            dry_run: args.behavior.dry_run,
            log_level: log_level(&args.logging),
        })
    }
}

fn log_level(opts: &LogOptions) -> LevelFilter {
    if opts.quiet {
        return LevelFilter::ERROR;
    }
    match opts.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
