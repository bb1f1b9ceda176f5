//! The process-wide runtime context
//!
//! [`WikiContext`] is built once at startup through [`WikiContextBuilder`]
//! and shared read-only afterwards. It owns the protocol flags derived from
//! the property store, holds (but does not call) the injected collaborators,
//! and derives every wiki location from `root_path` and
//! `root_directory_name`.
//!
//! # Example
//!
//! ```
//! use wiki_core::WikiContext;
//! use wiki_fs::PropertyStore;
//!
//! let properties: PropertyStore = [("wiki.protocol", "HTTPS")].into_iter().collect();
//! let context = WikiContext::builder()
//!     .root_path("/wiki")
//!     .root_directory_name("FitNesseRoot")
//!     .properties(properties)
//!     .build();
//!
//! assert!(context.use_https());
//! assert_eq!(context.root_page_path(), "/wiki/FitNesseRoot");
//! assert_eq!(
//!     context.test_history_directory().as_str(),
//!     "/wiki/FitNesseRoot/files/testResults"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use wiki_fs::{NormalizedPath, PropertyStore, WikiPath};

use crate::Result;
use crate::collaborators::{
    Authenticator, NoRecentChanges, NullTestSystemFactory, NullTestSystemListener,
    NullVersionsController, PageFactory, PromiscuousAuthenticator, RecentChanges,
    RequestLogger, ResponderFactory, TestSystemFactory, TestSystemListener,
    TracingRequestLogger, VersionsController,
};
use crate::page::{FileSystemPageFactory, WikiPage, WikiPageFactory};
use crate::variables::VariableChain;

/// `"https"` here switches the server to TLS.
pub const WIKI_PROTOCOL_PROPERTY: &str = "wiki.protocol";
/// Names the SSL parameter class handed to the TLS layer.
pub const SSL_PARAMETER_CLASS_PROPERTY: &str = "wiki.protocol.ssl.parameter.class";
/// `"required"` here makes client certificates mandatory.
pub const SSL_CLIENT_AUTH_PROPERTY: &str = "wiki.protocol.ssl.client.auth";
/// Overrides the test history directory.
pub const TEST_HISTORY_PATH_PROPERTY: &str = "test.history.path";

pub const DEFAULT_ROOT_PATH: &str = ".";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_CONTEXT_ROOT: &str = "/";

/// Version of the running wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiVersion(String);

impl WikiVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The version this crate was built as.
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WikiVersion {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for WikiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Immutable runtime configuration shared by every request handler.
#[derive(Debug)]
pub struct WikiContext {
    version: WikiVersion,
    port: u16,
    root_path: String,
    root_directory_name: String,
    context_root: String,

    properties: Arc<PropertyStore>,
    variables: VariableChain,

    wiki_page_factory: Arc<dyn WikiPageFactory>,
    responder_factory: ResponderFactory,
    page_factory: PageFactory,

    versions_controller: Arc<dyn VersionsController>,
    recent_changes: Arc<dyn RecentChanges>,
    authenticator: Arc<dyn Authenticator>,
    logger: Arc<dyn RequestLogger>,
    test_system_factory: Arc<dyn TestSystemFactory>,
    test_system_listener: Arc<dyn TestSystemListener>,

    use_https: bool,
    ssl_client_auth: bool,
    ssl_parameter_class_name: Option<String>,
}

impl WikiContext {
    pub fn builder() -> WikiContextBuilder {
        WikiContextBuilder::default()
    }

    /// Load the root page with the default variable chain.
    ///
    /// A new page is built on every call. Loader errors are returned as-is.
    pub fn root_page(&self) -> Result<Arc<dyn WikiPage>> {
        self.load_root_page(self.variables.clone())
    }

    /// Load the root page with `overrides` layered over the default chain.
    pub fn root_page_with<I, K, V>(&self, overrides: I) -> Result<Arc<dyn WikiPage>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.load_root_page(self.variables.scoped(overrides))
    }

    fn load_root_page(&self, variables: VariableChain) -> Result<Arc<dyn WikiPage>> {
        let location = NormalizedPath::verbatim(self.root_page_path());
        self.wiki_page_factory
            .make_page(&location, &self.root_directory_name, None, variables)
    }

    /// `<root_path>/<root_directory_name>`.
    pub fn root_page_path(&self) -> String {
        root_page_path(&self.root_path, &self.root_directory_name)
    }

    /// `test.history.path` when set, `<root page>/files/testResults` otherwise.
    pub fn test_history_directory(&self) -> NormalizedPath {
        match self.property(TEST_HISTORY_PATH_PROPERTY) {
            Some(configured) => NormalizedPath::verbatim(configured),
            None => NormalizedPath::verbatim(format!(
                "{}/{}/{}",
                self.root_page_path(),
                WikiPath::Files,
                WikiPath::TestResults
            )),
        }
    }

    /// `<root page>/files/testProgress/`; not configurable.
    pub fn test_progress_path(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.root_page_path(),
            WikiPath::Files,
            WikiPath::TestProgress
        )
    }

    /// Look up a property through the default chain.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.variables.lookup(name)
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// The default variable chain.
    pub fn variables(&self) -> &VariableChain {
        &self.variables
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    pub fn ssl_client_auth(&self) -> bool {
        self.ssl_client_auth
    }

    pub fn ssl_parameter_class_name(&self) -> Option<&str> {
        self.ssl_parameter_class_name.as_deref()
    }

    pub fn version(&self) -> &WikiVersion {
        &self.version
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn root_directory_name(&self) -> &str {
        &self.root_directory_name
    }

    pub fn context_root(&self) -> &str {
        &self.context_root
    }

    pub fn responder_factory(&self) -> &ResponderFactory {
        &self.responder_factory
    }

    pub fn page_factory(&self) -> &PageFactory {
        &self.page_factory
    }

    pub fn versions_controller(&self) -> &Arc<dyn VersionsController> {
        &self.versions_controller
    }

    pub fn recent_changes(&self) -> &Arc<dyn RecentChanges> {
        &self.recent_changes
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub fn logger(&self) -> &Arc<dyn RequestLogger> {
        &self.logger
    }

    pub fn test_system_factory(&self) -> &Arc<dyn TestSystemFactory> {
        &self.test_system_factory
    }

    pub fn test_system_listener(&self) -> &Arc<dyn TestSystemListener> {
        &self.test_system_listener
    }
}

fn root_page_path(root_path: &str, root_directory_name: &str) -> String {
    format!("{root_path}/{root_directory_name}")
}

/// True when `name` resolves and equals `expected` ignoring ASCII case.
fn flag(variables: &VariableChain, name: &str, expected: &str) -> bool {
    variables
        .lookup(name)
        .is_some_and(|value| value.eq_ignore_ascii_case(expected))
}

/// Collects settings and collaborators for a [`WikiContext`].
///
/// Every field has a default, so `build` cannot fail.
#[derive(Debug)]
pub struct WikiContextBuilder {
    version: WikiVersion,
    port: u16,
    root_path: String,
    root_directory_name: String,
    context_root: String,
    properties: Arc<PropertyStore>,
    wiki_page_factory: Arc<dyn WikiPageFactory>,
    versions_controller: Arc<dyn VersionsController>,
    recent_changes: Arc<dyn RecentChanges>,
    authenticator: Arc<dyn Authenticator>,
    logger: Arc<dyn RequestLogger>,
    test_system_factory: Arc<dyn TestSystemFactory>,
    test_system_listener: Arc<dyn TestSystemListener>,
}

impl Default for WikiContextBuilder {
    fn default() -> Self {
        Self {
            version: WikiVersion::current(),
            port: DEFAULT_PORT,
            root_path: DEFAULT_ROOT_PATH.to_string(),
            root_directory_name: WikiPath::DefaultRoot.as_str().to_string(),
            context_root: DEFAULT_CONTEXT_ROOT.to_string(),
            properties: Arc::new(PropertyStore::new()),
            wiki_page_factory: Arc::new(FileSystemPageFactory::new()),
            versions_controller: Arc::new(NullVersionsController),
            recent_changes: Arc::new(NoRecentChanges),
            authenticator: Arc::new(PromiscuousAuthenticator),
            logger: Arc::new(TracingRequestLogger),
            test_system_factory: Arc::new(NullTestSystemFactory),
            test_system_listener: Arc::new(NullTestSystemListener),
        }
    }
}

impl WikiContextBuilder {
    pub fn version(mut self, version: WikiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn root_directory_name(mut self, name: impl Into<String>) -> Self {
        self.root_directory_name = name.into();
        self
    }

    pub fn context_root(mut self, context_root: impl Into<String>) -> Self {
        self.context_root = context_root.into();
        self
    }

    pub fn properties(mut self, properties: impl Into<Arc<PropertyStore>>) -> Self {
        self.properties = properties.into();
        self
    }

    pub fn wiki_page_factory(mut self, factory: Arc<dyn WikiPageFactory>) -> Self {
        self.wiki_page_factory = factory;
        self
    }

    pub fn versions_controller(mut self, controller: Arc<dyn VersionsController>) -> Self {
        self.versions_controller = controller;
        self
    }

    pub fn recent_changes(mut self, recent_changes: Arc<dyn RecentChanges>) -> Self {
        self.recent_changes = recent_changes;
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn test_system_factory(mut self, factory: Arc<dyn TestSystemFactory>) -> Self {
        self.test_system_factory = factory;
        self
    }

    pub fn test_system_listener(mut self, listener: Arc<dyn TestSystemListener>) -> Self {
        self.test_system_listener = listener;
        self
    }

    /// Assemble the context and derive its protocol flags.
    ///
    /// Missing or unrecognised property values fall back to plain HTTP with
    /// optional client auth.
    pub fn build(self) -> WikiContext {
        let root_page_path = root_page_path(&self.root_path, &self.root_directory_name);
        let variables = VariableChain::system(Arc::clone(&self.properties));

        let use_https = flag(&variables, WIKI_PROTOCOL_PROPERTY, "https");
        let ssl_client_auth = flag(&variables, SSL_CLIENT_AUTH_PROPERTY, "required");
        let ssl_parameter_class_name = variables
            .lookup(SSL_PARAMETER_CLASS_PROPERTY)
            .map(str::to_owned);

        tracing::debug!(
            version = %self.version,
            root_page_path = %root_page_path,
            port = self.port,
            use_https,
            ssl_client_auth,
            properties = self.properties.len(),
            "Assembled wiki context"
        );

        WikiContext {
            version: self.version,
            port: self.port,
            root_path: self.root_path,
            root_directory_name: self.root_directory_name,
            context_root: self.context_root,
            properties: self.properties,
            variables,
            wiki_page_factory: self.wiki_page_factory,
            responder_factory: ResponderFactory::new(root_page_path.clone()),
            page_factory: PageFactory::new(root_page_path),
            versions_controller: self.versions_controller,
            recent_changes: self.recent_changes,
            authenticator: self.authenticator,
            logger: self.logger,
            test_system_factory: self.test_system_factory,
            test_system_listener: self.test_system_listener,
            use_https,
            ssl_client_auth,
            ssl_parameter_class_name,
        }
    }
}
