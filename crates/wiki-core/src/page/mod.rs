//! Wiki page abstraction and the root page loader seam
//!
//! The runtime context never builds pages itself. It hands a location, a
//! name and a resolved [`VariableChain`] to a [`WikiPageFactory`] and returns
//! whatever the factory produces, errors included.

mod filesystem;

pub use filesystem::{FileSystemPage, FileSystemPageFactory};

use std::fmt;
use std::sync::Arc;

use wiki_fs::NormalizedPath;

use crate::Result;
use crate::variables::VariableChain;

/// A node of the persisted wiki tree.
pub trait WikiPage: Send + Sync + fmt::Debug {
    /// The page's identifying name (its directory name).
    fn name(&self) -> &str;

    /// Filesystem location of the page directory.
    fn location(&self) -> &NormalizedPath;

    /// The enclosing page, `None` for the root.
    fn parent(&self) -> Option<Arc<dyn WikiPage>>;

    /// The variable chain this page was built with.
    fn variables(&self) -> &VariableChain;

    /// Resolve a variable through the page's chain.
    fn variable(&self, name: &str) -> Option<String> {
        self.variables().lookup(name).map(str::to_owned)
    }

    fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Constructs pages from a location on disk.
///
/// Implementations may fail with an I/O-kind error; callers propagate it
/// unchanged.
pub trait WikiPageFactory: Send + Sync + fmt::Debug {
    fn make_page(
        &self,
        location: &NormalizedPath,
        name: &str,
        parent: Option<Arc<dyn WikiPage>>,
        variables: VariableChain,
    ) -> Result<Arc<dyn WikiPage>>;
}
