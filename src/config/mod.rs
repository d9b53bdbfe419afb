//! Reporter configuration: desired auth settings and expected templates.

mod reporter_config;

use std::path::PathBuf;

pub use reporter_config::{
    DesiredAuthSettings, ReporterConfig, TemplateDescriptor, load_config, resolve_config,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("auth.project_ref must not be empty")]
    EmptyProjectRef,

    #[error("template file name '{0}' must be a plain file name")]
    InvalidFileName(String),

    #[error("template '{0}' is listed more than once")]
    DuplicateTemplate(String),

    #[error("unknown template '{name}'. Available: {available}")]
    UnknownTemplate { name: String, available: String },
}
