//! Configuration errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Write { path, .. } => Some(path),
            ConfigError::Invalid(_) => None,
        }
    }
}
