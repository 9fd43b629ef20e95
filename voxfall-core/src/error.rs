//! Errors surfaced by the sandbox.
//!
//! Ignored placements, liquid falling into the void and cancelled reveals are
//! ordinary outcomes and never show up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Failure loading or validating the sandbox configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config file {path}: {source}")]
    Io {
        /// The file that was accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid JSON5 for the config schema.
    #[error("config file {path} is malformed: {message}")]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Failure of a sandbox operation.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// No level exists at the given index.
    #[error("unknown level {index} (have {count})")]
    UnknownLevel {
        /// The requested index.
        index: usize,
        /// How many levels exist.
        count: usize,
    },
    /// The background computation of an edit panicked or was aborted.
    #[error("background edit failed: {0}")]
    Worker(#[from] JoinError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
