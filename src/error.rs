//! All error types for the stringsgen crate.
//!
//! These are returned from configuration loading, planning, and generation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: missing keys file path")]
    MissingKeysFilePath,

    #[error("filesystem error at `{}`: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// Creates a filesystem error bound to the path that failed.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from incomplete configuration rather than I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingKeysFilePath | Error::Parse(_))
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, Error::Filesystem { .. } | Error::Io(_))
    }
}
