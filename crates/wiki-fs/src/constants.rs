//! Well-known directory names inside a wiki root.

use std::path::Path;

/// Standard wiki filesystem names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikiPath {
    /// The default root page directory (`FitNesseRoot`)
    DefaultRoot,
    /// The `files` directory holding uploaded and generated files
    Files,
    /// The `testResults` directory under `files` (test history)
    TestResults,
    /// The `testProgress` directory under `files`
    TestProgress,
    /// The page content file inside every page directory
    Content,
}

impl WikiPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultRoot => "FitNesseRoot",
            Self::Files => "files",
            Self::TestResults => "testResults",
            Self::TestProgress => "testProgress",
            Self::Content => "content.txt",
        }
    }
}

impl AsRef<Path> for WikiPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WikiPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WikiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
