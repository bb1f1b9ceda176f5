//! Error types for wiki-fs

use std::path::PathBuf;

/// Result type for wiki-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wiki-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} properties at {path}: {message}")]
    PropertiesParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported properties format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
