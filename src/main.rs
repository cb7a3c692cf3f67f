#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::process::ExitCode;
use version_ctl::args::Args;
use version_ctl::config::Config;
use version_ctl::{app, exit, logging};
use version_ctl_shared_kernel::VersionCtlError;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => return fail(&e.into()),
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("warning: {e:#}");
    }
    log::debug!("version-ctl v{} · {:?}", version_ctl::VERSION, config);

    match app::run(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(err: &VersionCtlError) -> ExitCode {
    eprintln!("error: {err}");
    exit::code_for(err)
}
