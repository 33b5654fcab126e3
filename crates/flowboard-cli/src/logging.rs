use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

use crate::types::LogLevel;

/// Install the global `tracing` subscriber.
///
/// Logs go to `log_file` when given. Otherwise console commands log to stderr
/// and the dashboard stays silent so the alternate screen is not garbled.
pub fn init(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = LevelFilter::from(level);
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None if interactive => builder
            .with_max_level(LevelFilter::OFF)
            .with_writer(std::io::sink)
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
