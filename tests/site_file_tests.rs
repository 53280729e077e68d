// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading both configurations from a site document.

#![cfg(feature = "yaml")]

mod common;

use common::{write_file, REPORT_SITE_YAML};
use serde_json::json;
use sitecfg::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_report_site_document() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", REPORT_SITE_YAML);

    let config = SiteConfigService::from_file(&path).unwrap().load().unwrap();

    let style = config.style.as_ref().unwrap();
    assert_eq!(style.preset_refs(), vec![&PresetRef::from("base")]);
    assert_eq!(style.content().len(), 3);
    assert!(style.content().is_relative());
    assert!(style.theme_extensions().is_empty());
    assert!(style.merged_theme().contains_key("fontFamily"));

    let root = dir.path().canonicalize().unwrap();
    let matcher = style.content_matcher().unwrap();
    assert!(matcher.is_match(root.join("pages/index.md")));
    assert!(matcher.is_match(root.join("components/chart/Bar.svelte")));
    assert!(matcher.is_match(
        root.join("node_modules/@evidence-dev/core-components/dist/table/Table.svelte")
    ));
    assert!(!matcher.is_match(root.join("node_modules/other/dist/x.js")));
    assert!(!matcher.is_match(root.join("pages/data.csv")));

    let server = config.dev_server.as_ref().unwrap();
    assert!(server.is_exposed());
    assert!(server.allowed_hosts().contains("framearch-juan.bonobo-fort.ts.net"));
    assert!(server.accepts_host("framearch-juan.bonobo-fort.ts.net:3000"));
    assert!(!server.accepts_host("bonobo-fort.ts.net"));
}

#[test]
fn test_report_site_consumer_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", REPORT_SITE_YAML);

    let value = SiteConfigService::from_file(&path)
        .unwrap()
        .load()
        .unwrap()
        .to_consumer_json();

    assert_eq!(value["style"]["presets"], json!(["base"]));
    assert_eq!(value["style"]["content"]["files"].as_array().unwrap().len(), 3);
    assert_eq!(
        value["devServer"],
        json!({
            "server": {
                "host": "0.0.0.0",
                "allowedHosts": ["framearch-juan.bonobo-fort.ts.net"]
            }
        })
    );
}

#[test]
fn test_style_section_only() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "site.yaml",
        "style:\n  content: ['./pages/**/*.md']\n",
    );

    let config = SiteConfigService::from_file(&path).unwrap().load().unwrap();
    assert!(config.style.is_some());
    assert!(config.dev_server.is_none());
}

#[test]
fn test_bad_server_section_does_not_affect_style() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "site.yaml",
        "style:\n  content: ['./pages/**/*.md']\nserver:\n  host: 0.0.0.0\n  allowedHosts: ['not a host!']\n",
    );

    let service = SiteConfigService::from_file(&path).unwrap();
    assert!(service.load_style().is_ok());
    assert!(matches!(
        service.load_dev_server(),
        Err(ConfigError::InvalidHostEntry { .. })
    ));
    assert!(service.load().is_err());
}

#[test]
fn test_unknown_section_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", "styles:\n  content: []\n");

    let result = SiteConfigService::from_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_empty_content_in_document_flagged() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", "style:\n  presets: [base]\n");

    let service = SiteConfigService::from_file(&path).unwrap();
    assert!(matches!(service.load_style(), Err(ConfigError::EmptyContentScope)));

    let lenient = SiteConfigService::builder()
        .with_file(&path)
        .unwrap()
        .with_builtin_presets()
        .scope_policy(ValidationPolicy::Warn)
        .build()
        .unwrap();
    assert!(lenient.load_style().unwrap().content().is_empty());
}

#[test]
fn test_presets_from_directory_next_to_file() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "presets/@acme/brand.yaml",
        "content: ['./src/**/*.svelte']\ntheme:\n  extend:\n    colors:\n      brand: '#236aa4'\n",
    );
    let path = write_file(
        dir.path(),
        "site.yaml",
        "style:\n  presets: ['@acme/brand', base]\n  content: ['./pages/**/*.md']\n",
    );

    let style = SiteConfigService::from_file(&path).unwrap().load_style().unwrap();
    assert_eq!(style.presets().len(), 2);
    assert_eq!(style.presets()[0].content().len(), 1);
    let merged = style.merged_theme();
    assert_eq!(merged.get("colors"), Some(&json!({"brand": "#236aa4"})));
    assert!(merged.contains_key("fontFamily"));
}

#[test]
fn test_from_directory_finds_site_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "site.yml", REPORT_SITE_YAML);

    let adapter = SiteFileAdapter::from_directory(dir.path()).unwrap();
    assert!(adapter.file_path().ends_with("site.yml"));
    assert!(adapter.document().server.is_some());

    let empty = TempDir::new().unwrap();
    assert!(SiteFileAdapter::from_directory(empty.path()).is_err());
}

#[test]
#[cfg(feature = "json")]
fn test_json_site_document() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "site.json",
        r#"{"server": {"host": "0.0.0.0", "port": 3000, "allowedHosts": ["example.ts.net"]}}"#,
    );

    let server = SiteConfigService::from_file(&path)
        .unwrap()
        .load_dev_server()
        .unwrap();
    assert_eq!(server.port(), Some(3000));
    assert!(server.allowed_hosts().contains("example.ts.net"));
}

#[test]
fn test_manual_reload() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "site.yaml",
        "server:\n  host: 0.0.0.0\n  allowedHosts: [a.test]\n",
    );

    let mut service = SiteConfigService::from_file(&path).unwrap();
    assert!(service.load_dev_server().unwrap().allowed_hosts().contains("a.test"));

    fs::write(&path, "server:\n  host: 0.0.0.0\n  allowedHosts: [b.test]\n").unwrap();

    // Still the old document until reloaded
    assert!(service.load_dev_server().unwrap().allowed_hosts().contains("a.test"));

    service.reload().unwrap();
    let server = service.load_dev_server().unwrap();
    assert!(server.allowed_hosts().contains("b.test"));
    assert!(!server.allowed_hosts().contains("a.test"));
}

#[test]
fn test_failed_reload_keeps_document() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", "server:\n  port: 3000\n");

    let mut service = SiteConfigService::from_file(&path).unwrap();
    fs::write(&path, "server: [unclosed\n").unwrap();

    assert!(service.reload().is_err());
    assert_eq!(service.load_dev_server().unwrap().port(), Some(3000));
}

#[test]
fn test_loads_emit_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "site.yaml", REPORT_SITE_YAML);
    assert!(SiteConfigService::from_file(&path).unwrap().load().is_ok());
}

#[test]
fn test_empty_theme_extend_key() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "site.yaml",
        "style:\n  content: ['./pages/*.md']\n  theme:\n    extend:\n",
    );

    let style = SiteConfigService::from_file(&path).unwrap().load_style().unwrap();
    assert!(style.theme_extensions().is_empty());
    assert_eq!(style.to_consumer_json()["theme"]["extend"], json!({}));
}

#[test]
fn test_site_dir_with_glob_characters() {
    let dir = TempDir::new().unwrap();
    for site in ["site[1]", "{draft"] {
        let path = write_file(
            dir.path(),
            &format!("{}/site.yaml", site),
            "style:\n  content: ['./pages/*.md']\n",
        );

        let style = SiteConfigService::from_file(&path).unwrap().load_style().unwrap();
        let root = dir.path().canonicalize().unwrap().join(site);
        let matcher = style.content_matcher().unwrap();
        assert!(matcher.is_match(root.join("pages/a.md")), "no match under {}", site);
        assert!(!matcher.is_match(root.join("pages/sub/a.md")));
    }
}

#[test]
fn test_demo_site_document_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/site.yaml");

    let config = SiteConfigService::from_file(&path).unwrap().load().unwrap();
    let style = config.style.unwrap();
    assert_eq!(style.presets().len(), 2);
    assert!(style.merged_theme().contains_key("colors"));
    assert_eq!(config.dev_server.unwrap().port(), Some(3000));
}
