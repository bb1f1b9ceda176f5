//! Error types for wiki-core

use std::path::PathBuf;

/// Result type for wiki-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wiki-core operations
///
/// Configuration problems never surface here; they degrade to defaults.
/// Every variant originates in page loading or the filesystem layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem access failed while loading a page
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page location exists but is not a directory
    #[error("Page location is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Filesystem error from wiki-fs
    #[error(transparent)]
    Fs(#[from] wiki_fs::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
