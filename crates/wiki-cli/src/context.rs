//! Runtime context assembly from command-line settings
//!
//! Properties are layered, later sources overriding earlier ones:
//!
//! 1. `<config_dir>/wiki/plugins.properties` (user level)
//! 2. `./plugins.properties` (working directory)
//! 3. `-D key=value` definitions
//!
//! An explicit `--properties` file replaces layers 1 and 2 and must exist.

use std::path::{Path, PathBuf};

use wiki_core::WikiContext;
use wiki_fs::{NormalizedPath, PropertyLoader, PropertyStore};

use crate::cli::Cli;
use crate::error::Result;

/// Default properties file name, looked up in the config and working dirs.
pub const PROPERTIES_FILE_NAME: &str = "plugins.properties";

/// Resolves the property store and builds the [`WikiContext`].
pub struct ContextLoader {
    cwd: PathBuf,
    /// Override for the user config directory (used for testing).
    /// When `None`, `dirs::config_dir()/wiki` is used.
    config_dir_override: Option<PathBuf>,
}

impl ContextLoader {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            config_dir_override: None,
        }
    }

    pub fn with_config_dir(cwd: impl Into<PathBuf>, config_dir: PathBuf) -> Self {
        Self {
            cwd: cwd.into(),
            config_dir_override: Some(config_dir),
        }
    }

    fn config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("wiki"))
    }

    /// Load and layer every property source.
    pub fn load_properties(
        &self,
        explicit: Option<&Path>,
        defines: &[(String, String)],
    ) -> Result<PropertyStore> {
        let loader = PropertyLoader::new();

        let mut store = match explicit {
            Some(path) => {
                let path = NormalizedPath::new(self.cwd.join(path));
                tracing::debug!(%path, "Loading explicit properties file");
                loader.load(&path)?
            }
            None => {
                let mut store = PropertyStore::new();
                if let Some(dir) = self.config_dir() {
                    let user = NormalizedPath::new(dir.join(PROPERTIES_FILE_NAME));
                    if let Some(layer) = loader.load_if_exists(&user)? {
                        store = store.overlay(&layer);
                    }
                }
                let local = NormalizedPath::new(self.cwd.join(PROPERTIES_FILE_NAME));
                if let Some(layer) = loader.load_if_exists(&local)? {
                    store = store.overlay(&layer);
                }
                store
            }
        };

        if !defines.is_empty() {
            let defined: PropertyStore = defines.iter().cloned().collect();
            tracing::debug!(count = defined.len(), "Applying command-line definitions");
            store = store.overlay(&defined);
        }

        Ok(store)
    }

    /// Build the context the server would run with.
    pub fn build(&self, cli: &Cli) -> Result<WikiContext> {
        let properties = self.load_properties(cli.properties.as_deref(), &cli.defines)?;

        Ok(WikiContext::builder()
            .root_path(cli.root_path.clone())
            .root_directory_name(cli.root_directory_name.clone())
            .port(cli.port)
            .context_root(cli.context_root.clone())
            .properties(properties)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn defines(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_sources_gives_empty_store() {
        let cwd = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        let loader = ContextLoader::with_config_dir(cwd.path(), config.path().to_path_buf());

        let store = loader.load_properties(None, &[]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn local_file_overrides_user_file() {
        let cwd = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        fs::write(
            config.path().join(PROPERTIES_FILE_NAME),
            "wiki.protocol=http\nuser.only=yes\n",
        )
        .unwrap();
        fs::write(cwd.path().join(PROPERTIES_FILE_NAME), "wiki.protocol=https\n").unwrap();

        let loader = ContextLoader::with_config_dir(cwd.path(), config.path().to_path_buf());
        let store = loader.load_properties(None, &[]).unwrap();

        assert_eq!(store.get("wiki.protocol"), Some("https"));
        assert_eq!(store.get("user.only"), Some("yes"));
    }

    #[test]
    fn defines_override_files() {
        let cwd = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        fs::write(cwd.path().join(PROPERTIES_FILE_NAME), "a=file\n").unwrap();

        let loader = ContextLoader::with_config_dir(cwd.path(), config.path().to_path_buf());
        let store = loader
            .load_properties(None, &defines(&[("a", "cli")]))
            .unwrap();

        assert_eq!(store.get("a"), Some("cli"));
    }

    #[test]
    fn explicit_file_skips_default_layers() {
        let cwd = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        fs::write(cwd.path().join(PROPERTIES_FILE_NAME), "local=yes\n").unwrap();
        fs::write(cwd.path().join("wiki.toml"), "\"wiki.protocol\" = \"https\"\n").unwrap();

        let loader = ContextLoader::with_config_dir(cwd.path(), config.path().to_path_buf());
        let store = loader
            .load_properties(Some(Path::new("wiki.toml")), &[])
            .unwrap();

        assert_eq!(store.get("wiki.protocol"), Some("https"));
        assert_eq!(store.get("local"), None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let cwd = TempDir::new().unwrap();
        let loader = ContextLoader::new(cwd.path());

        let result = loader.load_properties(Some(Path::new("absent.properties")), &[]);
        assert!(result.is_err());
    }
}
