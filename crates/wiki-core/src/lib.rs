//! Runtime context for the wiki server
//!
//! This crate is the composition root every other subsystem reads from:
//!
//! - **Variable resolution**: a [`VariableChain`] over the startup
//!   [`PropertyStore`](wiki_fs::PropertyStore), optionally scoped with
//!   per-call overrides
//! - **Runtime context**: [`WikiContext`], assembled once by
//!   [`WikiContextBuilder`], exposing protocol flags, derived paths and the
//!   injected collaborators
//! - **Root page loading**: the [`WikiPageFactory`] seam and its
//!   directory-backed [`FileSystemPageFactory`]
//!
//! ```text
//!          wiki-cli / server
//!                 |
//!             wiki-core
//!                 |
//!              wiki-fs
//! ```

pub mod collaborators;
pub mod context;
pub mod dates;
pub mod error;
pub mod page;
pub mod variables;

pub use collaborators::{
    Authenticator, NoRecentChanges, NullTestSystemFactory, NullTestSystemListener,
    NullVersionsController, PageFactory, PromiscuousAuthenticator, RecentChanges, RequestLogger,
    ResponderFactory, TestSystemFactory, TestSystemListener, TracingRequestLogger,
    VersionsController,
};
pub use context::{
    SSL_CLIENT_AUTH_PROPERTY, SSL_PARAMETER_CLASS_PROPERTY, TEST_HISTORY_PATH_PROPERTY,
    WIKI_PROTOCOL_PROPERTY, WikiContext, WikiContextBuilder, WikiVersion,
};
pub use error::{Error, Result};
pub use page::{FileSystemPage, FileSystemPageFactory, WikiPage, WikiPageFactory};
pub use variables::{VariableChain, VariableSource};
