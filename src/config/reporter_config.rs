//! Parse authdesk.toml into a `ReporterConfig`, filling gaps with built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ConfigError;
use crate::resolve;

const DEFAULT_TITLE: &str = "JAIA Website - Supabase Auth Configuration";
const DEFAULT_PROVIDER: &str = "Supabase";
const DEFAULT_PROJECT_REF: &str = "azazmlvyjkrtvtxzncbu";
const DEFAULT_SITE_URL: &str = "https://jaia-website.fly.dev";
const DEFAULT_REDIRECT_URLS: &[&str] = &["http://localhost:5173/**", "https://jaia-website.fly.dev/**"];
const DEFAULT_TEMPLATE_DIR: &str = "email-templates";
const DEFAULT_DASHBOARD_BASE: &str = "https://supabase.com/dashboard";
const DEFAULT_DOCS_URL: &str = "https://supabase.com/docs/guides/auth/redirect-urls";

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("confirm-signup.html", "Confirm Email Signup"),
    ("magic-link.html", "Magic Link"),
    ("invite-user.html", "Invite User"),
    ("reset-password.html", "Reset Password"),
];

/// Settings that must be applied by hand in the provider dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredAuthSettings {
    pub project_ref: String,
    pub site_url: String,
    pub redirect_urls: Vec<String>,
}

impl Default for DesiredAuthSettings {
    fn default() -> Self {
        Self {
            project_ref: DEFAULT_PROJECT_REF.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            redirect_urls: DEFAULT_REDIRECT_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// An expected email template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub file_name: String,
    pub display_name: String,
    /// Empty means "the project's templates page"; filled in by `prepare`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dashboard_url: String,
}

impl TemplateDescriptor {
    pub fn new(file_name: &str, display_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            display_name: display_name.to_string(),
            dashboard_url: String::new(),
        }
    }

    /// True if `name` is this template's file name, with or without `.html`.
    pub fn matches(&self, name: &str) -> bool {
        self.file_name == name || self.file_name.strip_suffix(".html") == Some(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    pub title: String,
    pub provider: String,
    pub template_dir: PathBuf,
    pub dashboard_base: String,
    pub docs_url: String,
    pub auth: DesiredAuthSettings,
    pub templates: Vec<TemplateDescriptor>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            dashboard_base: DEFAULT_DASHBOARD_BASE.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            auth: DesiredAuthSettings::default(),
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(file, name)| TemplateDescriptor::new(file, name))
                .collect(),
        }
    }
}

impl ReporterConfig {
    /// Dashboard page for site URL and redirect settings.
    pub fn settings_dashboard_url(&self) -> String {
        format!(
            "{}/project/{}/settings/auth",
            self.dashboard_base.trim_end_matches('/'),
            self.auth.project_ref
        )
    }

    /// Dashboard page listing the email templates.
    pub fn templates_dashboard_url(&self) -> String {
        format!(
            "{}/project/{}/auth/templates",
            self.dashboard_base.trim_end_matches('/'),
            self.auth.project_ref
        )
    }

    /// Validate, resolve `template_dir` against `base_dir`, and fill in
    /// per-template dashboard URLs.
    pub fn prepare(mut self, base_dir: &Path) -> Result<Self, ConfigError> {
        if self.auth.project_ref.trim().is_empty() {
            return Err(ConfigError::EmptyProjectRef);
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            let name = template.file_name.as_str();
            if name.is_empty()
                || name == "."
                || name == ".."
                || name.contains('/')
                || name.contains('\\')
            {
                return Err(ConfigError::InvalidFileName(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateTemplate(name.to_string()));
            }
        }

        self.template_dir = resolve::resolve_against(base_dir, &self.template_dir);

        let templates_url = self.templates_dashboard_url();
        for template in &mut self.templates {
            if template.dashboard_url.is_empty() {
                template.dashboard_url = templates_url.clone();
            }
        }
        Ok(self)
    }

    /// Look up a template by file name (the `.html` suffix is optional).
    pub fn find_template(&self, name: &str) -> Result<&TemplateDescriptor, ConfigError> {
        self.templates
            .iter()
            .find(|t| t.matches(name))
            .ok_or_else(|| ConfigError::UnknownTemplate {
                name: name.to_string(),
                available: self
                    .templates
                    .iter()
                    .map(|t| t.file_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Load and prepare a config file. Relative template dirs resolve against
/// the file's own directory.
pub fn load_config(path: &Path) -> Result<ReporterConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ReporterConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => current_dir(),
    };
    debug!(path = %path.display(), templates = config.templates.len(), "loaded config");
    config.prepare(&base)
}

/// Load the config named by `explicit`, or the first one found by
/// `resolve::config_file`, or the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ReporterConfig, ConfigError> {
    match resolve::config_file(explicit) {
        Some(path) => load_config(&path),
        None => ReporterConfig::default().prepare(&current_dir()),
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
