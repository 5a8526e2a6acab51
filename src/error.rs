//! Error types for the cellfn command line

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or running a formula
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{0}")]
    Functions(String),

    #[error("{0}")]
    Eval(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
