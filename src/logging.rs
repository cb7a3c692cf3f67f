// src/logging.rs
use anyhow::{Result, anyhow};
use tracing_subscriber::filter::LevelFilter;

/// Route `log` records from every crate to stderr at `level`.
pub fn init(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
