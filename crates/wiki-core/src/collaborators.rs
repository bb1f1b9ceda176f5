//! Collaborators held by the runtime context
//!
//! The context stores these and hands them out; it never calls into them.
//! Each trait is kept to the narrow surface other subsystems need, with a
//! do-nothing default used when the caller supplies none.

use std::fmt;

/// Decides whether a request's credentials are accepted.
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn is_authenticated(&self, username: Option<&str>, password: Option<&str>) -> bool;
}

/// Accepts every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromiscuousAuthenticator;

impl Authenticator for PromiscuousAuthenticator {
    fn is_authenticated(&self, _username: Option<&str>, _password: Option<&str>) -> bool {
        true
    }
}

/// Access log sink for served requests.
pub trait RequestLogger: Send + Sync + fmt::Debug {
    fn log(&self, line: &str);
}

/// Forwards request log lines to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
    fn log(&self, line: &str) {
        tracing::info!(target: "wiki::requests", "{line}");
    }
}

/// Page version history store.
pub trait VersionsController: Send + Sync + fmt::Debug {
    /// How many prior versions are retained per page.
    fn history_depth(&self) -> usize;
}

/// Keeps no history.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVersionsController;

impl VersionsController for NullVersionsController {
    fn history_depth(&self) -> usize {
        0
    }
}

/// Tracks recently edited pages.
pub trait RecentChanges: Send + Sync + fmt::Debug {
    /// Rows kept on the recent-changes page; `0` when tracking is off.
    fn max_entries(&self) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoRecentChanges;

impl RecentChanges for NoRecentChanges {
    fn max_entries(&self) -> usize {
        0
    }
}

/// Creates test systems by name.
pub trait TestSystemFactory: Send + Sync + fmt::Debug {
    fn supports(&self, test_system: &str) -> bool;
}

/// Supports no test system.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTestSystemFactory;

impl TestSystemFactory for NullTestSystemFactory {
    fn supports(&self, _test_system: &str) -> bool {
        false
    }
}

/// Handle given to the test runner for lifecycle notifications.
///
/// Opaque to the context; the runner defines what it receives.
pub trait TestSystemListener: Send + Sync + fmt::Debug {}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullTestSystemListener;

impl TestSystemListener for NullTestSystemListener {}

/// Dispatches requests to responders; rooted at the root page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderFactory {
    root_page_path: String,
}

impl ResponderFactory {
    pub fn new(root_page_path: impl Into<String>) -> Self {
        Self {
            root_page_path: root_page_path.into(),
        }
    }

    pub fn root_page_path(&self) -> &str {
        &self.root_page_path
    }
}

/// Renders HTML page templates; rooted at the root page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFactory {
    root_page_path: String,
}

impl PageFactory {
    pub fn new(root_page_path: impl Into<String>) -> Self {
        Self {
            root_page_path: root_page_path.into(),
        }
    }

    pub fn root_page_path(&self) -> &str {
        &self.root_page_path
    }
}
