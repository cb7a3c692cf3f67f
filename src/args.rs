// src/args.rs
use crate::parsers;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;
use version_ctl_infra::filesystem::{DEFAULT_HEADER_NAME, DEFAULT_MARKER_NAME};
use version_ctl_ports::Representation;

#[derive(Parser, Debug)]
#[command(
    name = "version-ctl",
    version,
    about = "Set or raise the version kept in a VERSION file and a generated version header"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub files: FileOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub logging: LogOptions,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set version information: major[.minor[.patch[-extra]]]
    Set {
        #[arg(value_name = "VERSION", allow_hyphen_values = true)]
        literal: String,
    },
    /// Raise a field (major|minor|patch|extra); all following fields become 0
    Raise { field: String },
    /// Restore both files from their .old backups
    Reset,
    /// Print the current version
    Show,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct FileOptions {
    /// Directory to read and write the version files in (default: current directory)
    #[arg(
        short = 'o',
        long,
        global = true,
        value_hint = ValueHint::DirPath,
        value_parser = parsers::existing_dir
    )]
    pub output_dir: Option<PathBuf>,

    /// Representation to read the current version from
    #[arg(short, long, global = true, value_enum, default_value_t = SourceArg::Marker)]
    pub source: SourceArg,

    /// Marker file name
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_MARKER_NAME,
        value_parser = parsers::file_name
    )]
    pub marker_name: String,

    /// Header file name
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_HEADER_NAME,
        value_parser = parsers::file_name
    )]
    pub header_name: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BehaviorOptions {
    /// Start from 0.0.0 when the source file does not exist
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Replace each file through a temp file and rename
    #[arg(long, global = true)]
    pub atomic: bool,

    /// Print the computed version without touching any file
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LogOptions {
    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SourceArg {
    Marker,
    Header,
}

impl From<SourceArg> for Representation {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Marker => Self::Marker,
            SourceArg::Header => Self::Header,
        }
    }
}
