//! Directory-backed pages

use std::fs;
use std::sync::Arc;

use wiki_fs::{NormalizedPath, WikiPath};

use super::{WikiPage, WikiPageFactory};
use crate::variables::VariableChain;
use crate::{Error, Result};

/// A page stored as a directory holding a `content.txt` and child pages.
#[derive(Debug)]
pub struct FileSystemPage {
    location: NormalizedPath,
    name: String,
    parent: Option<Arc<dyn WikiPage>>,
    variables: VariableChain,
}

impl FileSystemPage {
    /// Path of the page's content file.
    pub fn content_path(&self) -> NormalizedPath {
        self.location.join(WikiPath::Content.as_str())
    }

    /// Raw page content, `None` when the page has no content file.
    pub fn read_content(&self) -> Result<Option<String>> {
        let path = self.content_path();
        if !path.is_file() {
            return Ok(None);
        }
        let native = path.to_native();
        fs::read_to_string(&native)
            .map(Some)
            .map_err(|e| Error::io(native, e))
    }

    /// Names of child page directories, sorted.
    ///
    /// Hidden directories and the `files` directory are not pages.
    pub fn child_names(&self) -> Result<Vec<String>> {
        let native = self.location.to_native();
        let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| Error::io(entry.path(), e))?
                .is_dir();
            if !is_dir {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name == WikiPath::Files.as_str() {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

impl WikiPage for FileSystemPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &NormalizedPath {
        &self.location
    }

    fn parent(&self) -> Option<Arc<dyn WikiPage>> {
        self.parent.clone()
    }

    fn variables(&self) -> &VariableChain {
        &self.variables
    }
}

/// Loads [`FileSystemPage`]s; the page directory must already exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemPageFactory;

impl FileSystemPageFactory {
    pub fn new() -> Self {
        Self
    }

    /// Like [`WikiPageFactory::make_page`] but keeps the concrete type.
    pub fn load(
        &self,
        location: &NormalizedPath,
        name: &str,
        parent: Option<Arc<dyn WikiPage>>,
        variables: VariableChain,
    ) -> Result<Arc<FileSystemPage>> {
        let native = location.to_native();
        let metadata = fs::metadata(&native).map_err(|e| Error::io(&native, e))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory { path: native });
        }

        tracing::debug!(%location, name, "Loaded page");
        Ok(Arc::new(FileSystemPage {
            location: location.clone(),
            name: name.to_string(),
            parent,
            variables,
        }))
    }
}

impl WikiPageFactory for FileSystemPageFactory {
    fn make_page(
        &self,
        location: &NormalizedPath,
        name: &str,
        parent: Option<Arc<dyn WikiPage>>,
        variables: VariableChain,
    ) -> Result<Arc<dyn WikiPage>> {
        let page: Arc<dyn WikiPage> = self.load(location, name, parent, variables)?;
        Ok(page)
    }
}
