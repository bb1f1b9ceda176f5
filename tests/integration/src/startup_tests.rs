//! End-to-end startup scenarios
//!
//! These tests exercise the complete flow a server goes through at boot:
//! properties file -> property store -> runtime context -> root page.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiki_core::{FileSystemPageFactory, WikiContext, WikiPage};
use wiki_fs::{NormalizedPath, PropertyLoader};
use wiki_test_utils::TestWiki;

fn boot(wiki: &TestWiki, properties_file: &str) -> WikiContext {
    let path = NormalizedPath::new(wiki.root().join(properties_file));
    let properties = PropertyLoader::new().load(&path).unwrap();

    WikiContext::builder()
        .root_path(wiki.root_path())
        .root_directory_name("FitNesseRoot")
        .port(8443)
        .properties(properties)
        .build()
}

#[test]
fn test_https_server_startup() {
    let wiki = TestWiki::new();
    wiki.init_root("FitNesseRoot");
    wiki.add_page("FitNesseRoot", "FrontPage", "!1 Welcome");
    wiki.write_properties(
        "plugins.properties",
        &[
            ("wiki.protocol", "https"),
            ("wiki.protocol.ssl.client.auth", "required"),
            ("wiki.protocol.ssl.parameter.class", "com.example.SslParams"),
        ],
    );

    let context = boot(&wiki, "plugins.properties");

    assert!(context.use_https());
    assert!(context.ssl_client_auth());
    assert_eq!(context.ssl_parameter_class_name(), Some("com.example.SslParams"));
    assert_eq!(context.port(), 8443);

    let root = context.root_page().unwrap();
    assert_eq!(root.location().as_str(), context.root_page_path());
}

#[test]
fn test_plain_startup_from_toml() {
    let wiki = TestWiki::new();
    wiki.init_root("FitNesseRoot");
    wiki.write_file(
        "wiki.toml",
        r#"
"wiki.protocol" = "http"

[test.history]
path = "/srv/wiki/history"
"#,
    );

    let context = boot(&wiki, "wiki.toml");

    assert!(!context.use_https());
    assert!(!context.ssl_client_auth());
    assert_eq!(context.test_history_directory().as_str(), "/srv/wiki/history");
    assert_eq!(
        context.test_progress_path(),
        format!("{}/FitNesseRoot/files/testProgress/", wiki.root_path())
    );
}

#[test]
fn test_request_scoped_root_pages_share_context() {
    let wiki = TestWiki::new();
    wiki.init_root("FitNesseRoot");
    wiki.add_page("FitNesseRoot", "SuiteOne", "!1 One");
    wiki.add_page("FitNesseRoot", "SuiteTwo", "!1 Two");
    wiki.write_properties("plugins.properties", &[("site", "main")]);

    let context = Arc::new(boot(&wiki, "plugins.properties"));

    let request = context.root_page_with([("site", "preview")]).unwrap();
    let default = context.root_page().unwrap();

    assert_eq!(request.variable("site").as_deref(), Some("preview"));
    assert_eq!(default.variable("site").as_deref(), Some("main"));
    assert!(!Arc::ptr_eq(&request, &default));

    // The concrete loader also sees the page tree
    let page = FileSystemPageFactory::new()
        .load(
            default.location(),
            default.name(),
            None,
            context.variables().clone(),
        )
        .unwrap();
    assert_eq!(page.child_names().unwrap(), vec!["SuiteOne", "SuiteTwo"]);
}
