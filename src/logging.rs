//! Tracing setup.
//!
//! The TUI owns stdout, so logs only go to a file and only when one is
//! asked for. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set and valid, otherwise `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to `log_file`.
///
/// Returns false without installing anything when no file is given.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(true)
}
