//! Path resolution for the authdesk config file.
//!
//! Resolution order for the config file:
//!   1. --config PATH (returned even if it does not exist)
//!   2. AUTHDESK_CONFIG environment variable
//!   3. authdesk.toml in cwd
//!   4. {user_config_dir}/authdesk/config.toml
//!
//! When none of these exist the caller falls back to built-in defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

pub const CONFIG_ENV: &str = "AUTHDESK_CONFIG";
pub const LOCAL_CONFIG_NAME: &str = "authdesk.toml";

/// Return the OS-native authdesk config directory.
pub fn app_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "authdesk") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        home_dir().join(".config").join("authdesk")
    }
}

/// Return the path to the user-level config.toml.
pub fn app_config_path() -> PathBuf {
    app_config_dir().join("config.toml")
}

/// Locate the config file to load, or None to use built-in defaults.
pub fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using config from --config");
        return Some(path.to_path_buf());
    }
    if let Ok(env) = std::env::var(CONFIG_ENV) {
        if !env.is_empty() {
            debug!(path = %env, "using config from {}", CONFIG_ENV);
            return Some(expand_tilde(&env));
        }
    }
    let local = PathBuf::from(LOCAL_CONFIG_NAME);
    if local.is_file() {
        debug!(path = %local.display(), "using config from current directory");
        return Some(local);
    }
    let user = app_config_path();
    if user.is_file() {
        debug!(path = %user.display(), "using user config");
        return Some(user);
    }
    debug!("no config file found, using built-in defaults");
    None
}

/// Get the user's home directory.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand ~ to home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

/// Resolve `path` against `base` unless it is already absolute.
///
/// A leading `~` is expanded first.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    };
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_wins() {
        let path = Path::new("/nonexistent/custom.toml");
        assert_eq!(config_file(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_resolve_against_relative() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve_against(base, Path::new("email-templates")),
            PathBuf::from("/srv/site/email-templates")
        );
    }

    #[test]
    fn test_resolve_against_absolute() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve_against(base, Path::new("/opt/templates")),
            PathBuf::from("/opt/templates")
        );
    }

    #[test]
    fn test_resolve_against_tilde() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve_against(base, Path::new("~/templates")),
            home_dir().join("templates")
        );
    }
}
