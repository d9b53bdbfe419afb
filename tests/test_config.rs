//! Integration tests for config loading (src/config/).

mod common;

use std::path::PathBuf;
use tempfile::TempDir;

use authdesk::config::{self, ConfigError, ReporterConfig};
use authdesk::resolve;
use common::write_authdesk_toml;

#[test]
fn test_load_config_resolves_template_dir_against_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_authdesk_toml(tmp.path(), "https://example.org", &["https://example.org/**"]);

    let config = config::load_config(&path).unwrap();
    assert_eq!(config.template_dir, tmp.path().join("templates"));
    assert_eq!(config.auth.project_ref, "testref");
    assert_eq!(config.auth.redirect_urls, vec!["https://example.org/**".to_string()]);
    assert_eq!(config.title, "Test Site Auth");
    // Unset fields fall back to defaults.
    assert_eq!(config.provider, ReporterConfig::default().provider);
    assert_eq!(config.templates.len(), 4);
    assert!(config.templates[0].dashboard_url.ends_with("/project/testref/auth/templates"));
}

#[test]
fn test_load_config_absolute_template_dir() {
    let tmp = TempDir::new().unwrap();
    let abs = tmp.path().join("abs-templates");
    let content = format!("template_dir = {:?}\n", abs.to_string_lossy());
    let path = tmp.path().join("authdesk.toml");
    std::fs::write(&path, content).unwrap();

    let config = config::load_config(&path).unwrap();
    assert_eq!(config.template_dir, abs);
}

#[test]
fn test_load_config_custom_templates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("authdesk.toml");
    std::fs::write(
        &path,
        r#"
[[templates]]
file_name = "welcome.html"
display_name = "Welcome"

[[templates]]
file_name = "goodbye.html"
display_name = "Goodbye"
dashboard_url = "https://example.org/goodbye"
"#,
    )
    .unwrap();

    let config = config::load_config(&path).unwrap();
    let names: Vec<&str> = config.templates.iter().map(|t| t.file_name.as_str()).collect();
    assert_eq!(names, vec!["welcome.html", "goodbye.html"]);
    assert_eq!(config.templates[1].dashboard_url, "https://example.org/goodbye");
}

#[test]
fn test_load_config_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = config::load_config(&tmp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_config_bad_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("authdesk.toml");
    std::fs::write(&path, "[auth\nsite_url = 1").unwrap();
    let err = config::load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("authdesk.toml"));
}

#[test]
fn test_load_config_rejects_nested_file_name() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("authdesk.toml");
    std::fs::write(
        &path,
        r#"
[[templates]]
file_name = "sub/welcome.html"
display_name = "Welcome"
"#,
    )
    .unwrap();
    let err = config::load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFileName(name) if name == "sub/welcome.html"));
}

#[test]
fn test_resolve_config_explicit_path() {
    let tmp = TempDir::new().unwrap();
    let path = write_authdesk_toml(tmp.path(), "https://explicit.example.org", &[]);
    let config = config::resolve_config(Some(&path)).unwrap();
    assert_eq!(config.auth.site_url, "https://explicit.example.org");
    assert!(config.auth.redirect_urls.is_empty());
}

#[test]
fn test_expand_tilde_with_prefix() {
    let home = resolve::home_dir();
    assert_eq!(resolve::expand_tilde("~/templates"), home.join("templates"));
}

#[test]
fn test_expand_tilde_bare() {
    assert_eq!(resolve::expand_tilde("~"), resolve::home_dir());
}

#[test]
fn test_expand_tilde_no_tilde() {
    assert_eq!(
        resolve::expand_tilde("/absolute/path"),
        PathBuf::from("/absolute/path")
    );
}

#[test]
fn test_app_config_path_returns_toml() {
    let path = resolve::app_config_path();
    assert!(path.to_string_lossy().ends_with("config.toml"));
    assert!(path.to_string_lossy().contains("authdesk"));
}
