use proptest::prelude::*;
use wiki_core::{SSL_CLIENT_AUTH_PROPERTY, TEST_HISTORY_PATH_PROPERTY, WIKI_PROTOCOL_PROPERTY, WikiContext};
use wiki_fs::PropertyStore;

fn build(root: &str, dir: &str, props: Vec<(String, String)>) -> WikiContext {
    WikiContext::builder()
        .root_path(root)
        .root_directory_name(dir)
        .properties(props.into_iter().collect::<PropertyStore>())
        .build()
}

fn unrelated_properties() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,6}\\.[a-z]{1,6}", "\\PC{0,12}"), 0..8)
}

proptest! {
    #[test]
    fn test_https_false_without_protocol(props in unrelated_properties()) {
        let props: Vec<_> = props.into_iter().filter(|(k, _)| k != WIKI_PROTOCOL_PROPERTY).collect();
        prop_assert!(!build("/wiki", "FitNesseRoot", props).use_https());
    }

    #[test]
    fn test_https_matches_any_casing(mask in prop::collection::vec(any::<bool>(), 5)) {
        let value: String = "https"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let ctx = build("/wiki", "FitNesseRoot", vec![(WIKI_PROTOCOL_PROPERTY.into(), value)]);
        prop_assert!(ctx.use_https());
    }

    #[test]
    fn test_client_auth_only_for_required(value in "[a-zA-Z]{0,10}") {
        let ctx = build("/wiki", "FitNesseRoot", vec![(SSL_CLIENT_AUTH_PROPERTY.into(), value.clone())]);
        prop_assert_eq!(ctx.ssl_client_auth(), value.eq_ignore_ascii_case("required"));
    }

    #[test]
    fn test_progress_path_never_configurable(
        root in "/[a-z]{1,8}",
        dir in "[A-Z][a-zA-Z]{0,10}",
        props in unrelated_properties(),
        history in "/[a-z]{1,8}",
    ) {
        let mut props = props;
        props.push((TEST_HISTORY_PATH_PROPERTY.into(), history));
        let ctx = build(&root, &dir, props);
        prop_assert_eq!(ctx.test_progress_path(), format!("{}/{}/files/testProgress/", root, dir));
        prop_assert_eq!(ctx.root_page_path(), format!("{}/{}", root, dir));
    }
}
