//! Shared test fixtures and helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use authdesk::config::ReporterConfig;
use authdesk::reporter::Reporter;

/// Create a temporary directory with an empty email-templates/ inside.
pub fn temp_template_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let dir = tmp.path().join("email-templates");
    std::fs::create_dir_all(&dir).unwrap();
    (tmp, dir)
}

/// Write a template file with the given content.
pub fn write_template(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Default config pointed at `dir`.
pub fn config_for(dir: &Path) -> ReporterConfig {
    let mut config = ReporterConfig::default();
    config.template_dir = dir.to_path_buf();
    config
}

/// Run the full report into a string.
pub fn render_report(reporter: &Reporter) -> String {
    let mut buf = Vec::new();
    reporter.run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Run only the template inventory into a string.
pub fn render_inventory(reporter: &Reporter) -> String {
    let mut buf = Vec::new();
    reporter.report_template_inventory(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Create a minimal authdesk.toml for testing.
pub fn write_authdesk_toml(dir: &Path, site_url: &str, redirects: &[&str]) -> PathBuf {
    let urls = redirects
        .iter()
        .map(|u| format!("\"{}\"", u))
        .collect::<Vec<_>>()
        .join(", ");
    let content = format!(
        r#"title = "Test Site Auth"
template_dir = "templates"

[auth]
project_ref = "testref"
site_url = "{site_url}"
redirect_urls = [{urls}]
"#,
    );
    let path = dir.join("authdesk.toml");
    std::fs::write(&path, content).unwrap();
    path
}
