//! [`TestWiki`] builder for wiki test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiki_fs::{NormalizedPath, WikiPath};

/// A temporary directory holding a wiki root, with helpers for setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use wiki_test_utils::TestWiki;
///
/// let wiki = TestWiki::new();
/// wiki.init_root("FitNesseRoot");
/// wiki.add_page("FitNesseRoot", "FrontPage", "!1 Welcome");
/// wiki.write_properties("plugins.properties", &[("wiki.protocol", "https")]);
/// wiki.assert_file_exists("FitNesseRoot/FrontPage/content.txt");
/// ```
pub struct TestWiki {
    temp_dir: TempDir,
}

impl Default for TestWiki {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWiki {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The temporary directory; use it as the context's root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root path as the string a context builder expects.
    pub fn root_path(&self) -> String {
        NormalizedPath::new(self.root()).into_string()
    }

    /// Create the root page directory with a `files/` subdirectory.
    pub fn init_root(&self, root_directory_name: &str) -> PathBuf {
        let root_page = self.root().join(root_directory_name);
        fs::create_dir_all(root_page.join(WikiPath::Files.as_str())).unwrap();
        root_page
    }

    /// Create `parent/name/content.txt` holding `content`.
    pub fn add_page(&self, parent: &str, name: &str, content: &str) -> PathBuf {
        let page = self.root().join(parent).join(name);
        fs::create_dir_all(&page).unwrap();
        fs::write(page.join(WikiPath::Content.as_str()), content).unwrap();
        page
    }

    /// Write a `.properties` file (or any other text) at `name`.
    pub fn write_properties(&self, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        self.write_file(name, &content)
    }

    /// Write `content` to `name` relative to the root, creating parents.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
