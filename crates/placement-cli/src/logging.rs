use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log records go.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// The terminal UI owns stderr, so logs are dropped unless a file is given.
    Disabled,
}

impl<'a> LogTarget<'a> {
    pub(crate) fn for_terminal_ui(log_file: Option<&'a Path>) -> Self {
        log_file.map_or(Self::Disabled, Self::File)
    }

    pub(crate) fn for_command(log_file: Option<&'a Path>) -> Self {
        log_file.map_or(Self::Stderr, Self::File)
    }
}

/// Installs the global `tracing` subscriber. Verbosity follows `RUST_LOG`.
pub(crate) fn init(target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(io::stderr)
                .with_env_filter(filter())
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter())
                .init();
        }
    }
    Ok(())
}
