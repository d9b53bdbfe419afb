//! Write a sample authdesk.toml holding the built-in defaults.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::config::ReporterConfig;
use crate::resolve::LOCAL_CONFIG_NAME;

/// Generate authdesk.toml content from a config.
///
/// Per-template dashboard URLs are omitted when they are empty so the file
/// keeps following `auth.project_ref`.
pub fn generate_config_toml(config: &ReporterConfig) -> String {
    let mut doc = toml_edit::DocumentMut::new();

    doc.insert("title", toml_edit::value(config.title.as_str()));
    doc.insert("provider", toml_edit::value(config.provider.as_str()));
    doc.insert(
        "template_dir",
        toml_edit::value(config.template_dir.to_string_lossy().into_owned()),
    );
    doc.insert("dashboard_base", toml_edit::value(config.dashboard_base.as_str()));
    doc.insert("docs_url", toml_edit::value(config.docs_url.as_str()));

    let mut auth = toml_edit::Table::new();
    auth.insert("project_ref", toml_edit::value(config.auth.project_ref.as_str()));
    auth.insert("site_url", toml_edit::value(config.auth.site_url.as_str()));
    let mut urls = toml_edit::Array::new();
    for url in &config.auth.redirect_urls {
        urls.push(url.as_str());
    }
    auth.insert("redirect_urls", toml_edit::value(urls));
    doc.insert("auth", toml_edit::Item::Table(auth));

    let mut templates = toml_edit::ArrayOfTables::new();
    for template in &config.templates {
        let mut t = toml_edit::Table::new();
        t.insert("file_name", toml_edit::value(template.file_name.as_str()));
        t.insert("display_name", toml_edit::value(template.display_name.as_str()));
        if !template.dashboard_url.is_empty() {
            t.insert("dashboard_url", toml_edit::value(template.dashboard_url.as_str()));
        }
        templates.push(t);
    }
    doc.insert("templates", toml_edit::Item::ArrayOfTables(templates));

    doc.to_string()
}

/// Where `init` writes: `path` itself for a `.toml` file that is not a
/// directory, else `path/authdesk.toml`.
fn target_file(path: &Path) -> PathBuf {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if path.is_dir() || !is_toml {
        path.join(LOCAL_CONFIG_NAME)
    } else {
        path.to_path_buf()
    }
}

/// CLI entry point for `authdesk init`. Returns the written file.
pub fn run(path: &Path, force: bool) -> Result<PathBuf> {
    let target = target_file(path);
    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let config = ReporterConfig::default();
    std::fs::write(&target, generate_config_toml(&config))?;
    println!("Created {}", target.display());

    let base = target.parent().unwrap_or(Path::new("."));
    let template_dir = base.join(&config.template_dir);
    if !template_dir.exists() {
        std::fs::create_dir_all(&template_dir)?;
        println!("Created {}", template_dir.display());
    }

    Ok(target)
}
