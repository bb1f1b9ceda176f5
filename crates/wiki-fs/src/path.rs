//! Normalized path handling for wiki locations

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Separator used for every derived wiki path.
pub const SEPARATOR: char = '/';

/// A path normalized to use forward slashes internally.
///
/// Wiki locations are derived by string joins (`root/dir/files/...`), so the
/// path is kept as a string and only converted to a native `PathBuf` at the
/// I/O boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Backslashes become forward slashes; nothing else is rewritten.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Wrap an already-composed location as is, backslashes included.
    ///
    /// Used for configured and derived wiki locations, which must reach the
    /// filesystem exactly as they were reported.
    pub fn verbatim(path: impl Into<String>) -> Self {
        Self { inner: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append `segment` with exactly one separator between the two parts.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() || self.inner.ends_with(SEPARATOR) {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}{}{}", self.inner, SEPARATOR, segment)
        };
        Self { inner: joined }
    }

    /// Render as a directory string that always ends with the separator.
    pub fn to_dir_string(&self) -> String {
        if self.inner.ends_with(SEPARATOR) {
            self.inner.clone()
        } else {
            format!("{}{}", self.inner, SEPARATOR)
        }
    }

    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches(SEPARATOR);
        match trimmed.rfind(SEPARATOR) {
            Some(0) => Some(Self {
                inner: SEPARATOR.to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the last path component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches(SEPARATOR)
            .rsplit(SEPARATOR)
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Get the extension of the last component, if it has one.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
