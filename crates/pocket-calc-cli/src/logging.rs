//! Log subscriber setup
//!
//! `RUST_LOG` wins over the verbosity flags. The terminal UI owns the
//! screen, so it only logs when a log file is given.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, or the log file if one is configured
    Stderr,
    /// Only the log file; nothing if none is configured
    FileOnly,
}

/// Builds the log filter from `RUST_LOG` or the configured verbosity
#[must_use]
pub fn log_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()))
}

/// Installs the global subscriber
///
/// Returns `Ok(false)` when logging is disabled for this target.
pub fn init_logging(config: &CliConfig, target: LogTarget) -> CliResult<bool> {
    let (writer, ansi) = match (&config.log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, LogTarget::Stderr) => (
            BoxMakeWriter::new(std::io::stderr),
            config.color.should_color(),
        ),
        (None, LogTarget::FileOnly) => return Ok(false),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(config))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| CliError::config(format!("failed to install logger: {e}")))?;
    Ok(true)
}
