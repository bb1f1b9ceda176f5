//! Tests for context assembly, protocol flags and derived paths

use pretty_assertions::assert_eq;
use rstest::rstest;
use wiki_core::{
    SSL_CLIENT_AUTH_PROPERTY, SSL_PARAMETER_CLASS_PROPERTY, TEST_HISTORY_PATH_PROPERTY,
    WIKI_PROTOCOL_PROPERTY, WikiContext,
};
use wiki_fs::PropertyStore;

fn context(props: &[(&str, &str)]) -> WikiContext {
    let properties: PropertyStore = props.iter().copied().collect();
    WikiContext::builder()
        .root_path("/wiki")
        .root_directory_name("FitNesseRoot")
        .properties(properties)
        .build()
}

mod protocol_flags {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_https_off_without_protocol_property() {
        assert!(!context(&[]).use_https());
    }

    #[rstest]
    #[case("https")]
    #[case("HTTPS")]
    #[case("Https")]
    #[case("hTtPs")]
    fn test_https_is_case_insensitive(#[case] value: &str) {
        assert!(context(&[(WIKI_PROTOCOL_PROPERTY, value)]).use_https());
    }

    #[rstest]
    #[case("http")]
    #[case("")]
    #[case("https ")]
    #[case("ssl")]
    fn test_other_protocols_are_plain(#[case] value: &str) {
        assert!(!context(&[(WIKI_PROTOCOL_PROPERTY, value)]).use_https());
    }

    #[rstest]
    #[case("required")]
    #[case("REQUIRED")]
    #[case("Required")]
    fn test_client_auth_required(#[case] value: &str) {
        assert!(context(&[(SSL_CLIENT_AUTH_PROPERTY, value)]).ssl_client_auth());
    }

    #[rstest]
    #[case("optional")]
    #[case("none")]
    #[case("true")]
    #[case("")]
    fn test_client_auth_other_values(#[case] value: &str) {
        assert!(!context(&[(SSL_CLIENT_AUTH_PROPERTY, value)]).ssl_client_auth());
    }

    #[test]
    fn test_client_auth_absent() {
        assert!(!context(&[]).ssl_client_auth());
    }

    #[test]
    fn test_flags_are_independent() {
        let ctx = context(&[(SSL_CLIENT_AUTH_PROPERTY, "required")]);
        assert!(!ctx.use_https());
        assert!(ctx.ssl_client_auth());
    }

    #[test]
    fn test_ssl_parameter_class_name() {
        let ctx = context(&[(SSL_PARAMETER_CLASS_PROPERTY, "fitnesse.socketservice.SslParameters")]);
        assert_eq!(
            ctx.ssl_parameter_class_name(),
            Some("fitnesse.socketservice.SslParameters")
        );
        assert_eq!(context(&[]).ssl_parameter_class_name(), None);
    }
}

mod derived_paths {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_page_path_is_literal_join() {
        let ctx = context(&[]);
        assert_eq!(ctx.root_page_path(), "/wiki/FitNesseRoot");
        assert_eq!(ctx.root_page_path(), ctx.root_page_path());
    }

    #[test]
    fn test_history_directory_default() {
        let ctx = context(&[]);
        assert_eq!(
            ctx.test_history_directory().as_str(),
            "/wiki/FitNesseRoot/files/testResults"
        );
    }

    #[test]
    fn test_history_directory_override() {
        let ctx = context(&[(TEST_HISTORY_PATH_PROPERTY, "/var/hist")]);
        assert_eq!(ctx.test_history_directory().as_str(), "/var/hist");
    }

    #[test]
    fn test_history_directory_override_is_returned_exactly() {
        let ctx = context(&[(TEST_HISTORY_PATH_PROPERTY, r"C:\hist\results")]);
        assert_eq!(ctx.test_history_directory().as_str(), r"C:\hist\results");
    }

    #[test]
    fn test_history_directory_default_keeps_root_path_verbatim() {
        let ctx = WikiContext::builder()
            .root_path(r"D:\wiki")
            .root_directory_name("FitNesseRoot")
            .build();
        assert_eq!(
            ctx.test_history_directory().as_str(),
            r"D:\wiki/FitNesseRoot/files/testResults"
        );
    }

    #[test]
    fn test_progress_path_default() {
        let ctx = context(&[]);
        assert_eq!(ctx.test_progress_path(), "/wiki/FitNesseRoot/files/testProgress/");
    }

    #[test]
    fn test_progress_path_ignores_properties() {
        let ctx = context(&[
            (TEST_HISTORY_PATH_PROPERTY, "/var/hist"),
            ("test.progress.path", "/elsewhere"),
        ]);
        assert_eq!(ctx.test_progress_path(), "/wiki/FitNesseRoot/files/testProgress/");
    }

    #[test]
    fn test_paths_do_not_touch_filesystem() {
        let ctx = WikiContext::builder()
            .root_path("/definitely/not/here")
            .root_directory_name("Nowhere")
            .build();
        assert_eq!(ctx.root_page_path(), "/definitely/not/here/Nowhere");
        assert!(!ctx.test_history_directory().exists());
    }
}

mod property_access {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_property_lookup() {
        let ctx = context(&[("a", "1")]);
        assert_eq!(ctx.property("a"), Some("1"));
        assert_eq!(ctx.property("b"), None);
    }

    #[test]
    fn test_full_property_set() {
        let ctx = context(&[("a", "1"), ("b", "2")]);
        let all: Vec<_> = ctx.properties().iter().collect();
        assert_eq!(all, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_scoped_precedence() {
        let ctx = context(&[("a", "1")]);
        let scoped = ctx.variables().scoped([("a", "2"), ("b", "3")]);

        assert_eq!(scoped.lookup("a"), Some("2"));
        assert_eq!(scoped.lookup("b"), Some("3"));
        assert_eq!(ctx.property("a"), Some("1"));
        assert_eq!(ctx.property("b"), None);
    }
}

mod settings {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use wiki_core::{
        Authenticator, RecentChanges, RequestLogger, TestSystemFactory, VersionsController,
        WikiVersion,
    };

    #[derive(Debug)]
    struct DenyAll;

    impl Authenticator for DenyAll {
        fn is_authenticated(&self, _username: Option<&str>, _password: Option<&str>) -> bool {
            false
        }
    }

    #[test]
    fn test_settings_are_exposed() {
        let ctx = WikiContext::builder()
            .port(8080)
            .context_root("/wiki/")
            .version(WikiVersion::new("20240101"))
            .build();

        assert_eq!(ctx.port(), 8080);
        assert_eq!(ctx.context_root(), "/wiki/");
        assert_eq!(ctx.version().as_str(), "20240101");
    }

    #[test]
    fn test_injected_collaborators_are_held() {
        let ctx = WikiContext::builder().authenticator(Arc::new(DenyAll)).build();
        assert!(!ctx.authenticator().is_authenticated(Some("bob"), Some("secret")));
    }

    #[test]
    fn test_default_collaborators() {
        let ctx = WikiContext::builder().build();
        assert!(ctx.authenticator().is_authenticated(None, None));
        assert_eq!(ctx.versions_controller().history_depth(), 0);
        assert!(!ctx.test_system_factory().supports("slim"));
        assert_eq!(ctx.recent_changes().max_entries(), 0);
        assert!(format!("{:?}", ctx.test_system_listener()).contains("NullTestSystemListener"));

        ctx.logger().log("GET /FrontPage 200");
    }
}
