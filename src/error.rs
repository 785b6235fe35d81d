//! Error types shared across the crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::terraform::LoadError;

/// File operation that failed, used in [`Error::Io`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Open,
    Create,
    Write,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOperation::Open => write!(f, "open"),
            IoOperation::Create => write!(f, "create"),
            IoOperation::Write => write!(f, "write"),
        }
    }
}

/// Errors surfaced by SBOM generation and emission.
#[derive(Error, Debug)]
pub enum Error {
    /// The Terraform directory could not be loaded.
    #[error("failed to load Terraform module: {0}")]
    Load(#[from] LoadError),

    /// The output file could not be opened, created, or written.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: IoOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested output format is not one of csv, json, xml.
    #[error("unsupported output format: {0}. Supported formats are: csv, json, xml")]
    UnsupportedFormat(String),

    /// The configuration file is missing or malformed.
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(operation: IoOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
