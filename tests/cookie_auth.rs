//! Integration tests for cookie-based authentication detection
//!
//! These tests drive the check through parsed configuration documents, the
//! way request-handling and validation code receives them.

use apiconfig::api::{
    AuthFeatures, cookie_providers, has_cookie_auth_enabled, parse_api_config, validate_api,
};

/// (description, document, expected)
const SCENARIOS: &[(&str, &str, bool)] = &[
    ("api absent", r#"{}"#, false),
    ("api null", r#"{"api": null}"#, false),
    ("auth absent", r#"{"api": {}}"#, false),
    (
        "auth null",
        r#"{"api": {"authenticationConfig": null}}"#,
        false,
    ),
    (
        "cookie absent",
        r#"{"api": {"authenticationConfig": {}}}"#,
        false,
    ),
    (
        "cookie null",
        r#"{"api": {"authenticationConfig": {"cookieBased": null}}}"#,
        false,
    ),
    (
        "providers empty",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": []}}}}"#,
        false,
    ),
    (
        "providers missing",
        r#"{"api": {"authenticationConfig": {"cookieBased": {}}}}"#,
        false,
    ),
    (
        "one provider",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": [
            {"id": "github", "kind": "AuthProviderGithub"}
        ]}}}}"#,
        true,
    ),
    (
        "two providers",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": [
            {"id": "github", "kind": "AuthProviderGithub"},
            {"id": "auth0", "kind": "AuthProviderOIDC",
             "oidcConfig": {"issuer": "https://example.auth0.com/", "clientId": "id", "clientSecret": "secret"}}
        ]}}}}"#,
        true,
    ),
    (
        "providers null",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": null}}}}"#,
        false,
    ),
    (
        "roles null",
        r#"{"api": {"roles": null, "operations": null}}"#,
        false,
    ),
    (
        "unrecognised provider kind",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": [
            {"id": "corp-sso", "kind": "AuthProviderSaml"}
        ]}}}}"#,
        true,
    ),
    (
        "provider without fields",
        r#"{"api": {"authenticationConfig": {"cookieBased": {"providers": [{}]}}}}"#,
        true,
    ),
];

#[test]
fn test_scenario_table() {
    for (description, document, expected) in SCENARIOS {
        let config = parse_api_config(document)
            .unwrap_or_else(|e| panic!("{}: failed to parse: {}", description, e));
        assert_eq!(
            has_cookie_auth_enabled(config.api.as_ref()),
            *expected,
            "scenario: {}",
            description
        );
    }
}

#[test]
fn test_consumers_agree_with_check() {
    for (description, document, _) in SCENARIOS {
        let config = parse_api_config(document).unwrap();
        let api = config.api.as_ref();
        let enabled = has_cookie_auth_enabled(api);

        assert_eq!(
            enabled,
            !cookie_providers(api).is_empty(),
            "providers: {}",
            description
        );
        assert_eq!(
            enabled,
            AuthFeatures::from_api(api).has_auth_providers,
            "features: {}",
            description
        );
        assert_eq!(
            enabled,
            validate_api(api).cookie_auth_enabled,
            "validation: {}",
            description
        );
    }
}

#[test]
fn test_concurrent_checks_on_shared_config() {
    use std::sync::Arc;
    use std::thread;

    let (_, document, expected) = SCENARIOS[8];
    assert!(expected);
    let config = Arc::new(parse_api_config(document).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || has_cookie_auth_enabled(config.api.as_ref()))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
