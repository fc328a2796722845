use serde_json::json;
use swb_domain::config::{BundleConfig, ContactInfo, ViewConfig};
use swb_domain::constants::{DEFAULT_PAGE_TITLE, DEFAULT_TEMPLATE, SWAGGER_URI_PATH};

#[test]
fn config_defaults_are_sane() {
    let cfg = BundleConfig::default();
    assert_eq!(cfg.resource_package, "");
    assert!(cfg.pretty_print);
    assert_eq!(cfg.context_root, "/");
    assert_eq!(cfg.schemes, vec!["http".to_owned()]);
    assert!(cfg.enabled);
    assert!(cfg.include_ui_resource);
    assert!(cfg.uri_prefix.is_none());
    assert!(cfg.contact.is_none());
    assert!(cfg.license.is_none());

    let view = ViewConfig::default();
    assert_eq!(view.page_title.as_deref(), Some("Swagger UI"));
    assert_eq!(view.template_url, "index.ftl");
    assert!(view.validator_url.is_none());
}

#[test]
fn constants_match_published_defaults() {
    assert_eq!(SWAGGER_URI_PATH, "/swagger-static");
    assert_eq!(DEFAULT_PAGE_TITLE, "Swagger UI");
    assert_eq!(DEFAULT_TEMPLATE, "index.ftl");
}

#[test]
fn bundle_config_deserializes() {
    let raw = json!({
        "resourcePackage": "com.example.api,com.example.admin",
        "title": "Pet Store",
        "version": "1.2.0",
        "contact": { "name": "API team", "email": "api@example.com" },
        "license": { "name": "Apache 2.0" },
        "viewConfig": { "pageTitle": "Pets", "validatorUrl": "https://validator.example.com" },
        "prettyPrint": false,
        "contextRoot": "/app",
        "schemes": ["https"],
        "includeUiResource": false
    });

    let cfg: BundleConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.resource_package, "com.example.api,com.example.admin");
    assert_eq!(cfg.title.as_deref(), Some("Pet Store"));
    assert_eq!(
        cfg.contact,
        Some(ContactInfo {
            name: Some("API team".to_owned()),
            url: None,
            email: Some("api@example.com".to_owned()),
        })
    );
    assert_eq!(cfg.view_config.page_title.as_deref(), Some("Pets"));
    assert_eq!(cfg.view_config.template_url, "index.ftl");
    assert_eq!(cfg.view_config.validator_url.as_deref(), Some("https://validator.example.com"));
    assert!(!cfg.pretty_print);
    assert_eq!(cfg.context_root, "/app");
    assert_eq!(cfg.schemes, vec!["https".to_owned()]);
    assert!(cfg.enabled);
    assert!(!cfg.include_ui_resource);
}

#[test]
fn missing_view_config_takes_defaults() {
    let cfg: BundleConfig =
        serde_json::from_value(json!({ "resourcePackage": "p" })).expect("config deserialize");
    assert_eq!(cfg.view_config, ViewConfig::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = json!({
        "resourcePackage": "p",
        "somethingElse": { "nested": true },
        "viewConfig": { "theme": "dark" }
    });

    let cfg: BundleConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.resource_package, "p");
    assert_eq!(cfg.view_config, ViewConfig::default());
}

#[test]
fn snake_case_and_legacy_keys_are_accepted() {
    let raw = json!({
        "resource_package": "p",
        "context_root": "/root",
        "uri_prefix": "/prefix",
        "swaggerViewConfiguration": { "template_url": "custom.html" },
        "includeSwaggerResource": false
    });

    let cfg: BundleConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.resource_package, "p");
    assert_eq!(cfg.context_root, "/root");
    assert_eq!(cfg.effective_context_root(), "/prefix");
    assert_eq!(cfg.view_config.template_url, "custom.html");
    assert!(!cfg.include_ui_resource);
}

#[test]
fn explicit_null_page_title_clears_it() {
    let raw = json!({ "viewConfig": { "pageTitle": null } });
    let cfg: BundleConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.view_config.page_title.is_none());
}
