//! Configuration file discovery and loading.
//!
//! Priority order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`.whatlies/config.yml`) or the `--config` file
//! 3. `WHATLIES_DOC_URL` environment variable

use crate::config::schema::ExtrasConfig;
use crate::error::{Result, WhatliesError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the installation guide URL.
pub const DOC_URL_ENV: &str = "WHATLIES_DOC_URL";

/// Path of the project config under `project_root`.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".whatlies").join("config.yml")
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ExtrasConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WhatliesError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WhatliesError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`ExtrasConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ExtrasConfig> {
    if content.trim().is_empty() {
        return Ok(ExtrasConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| WhatliesError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: ExtrasConfig, lookup: F) -> ExtrasConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(DOC_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("Doc URL overridden by {}", DOC_URL_ENV);
        config.install_hint.doc_url = url;
    }
    config
}

/// Load config with optional path override.
///
/// If `config_override` is provided that file must exist. Otherwise the
/// project config is used when present, and defaults when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ExtrasConfig> {
    let config = if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(path)?
    } else {
        let path = project_config_path(project_root);
        if path.exists() {
            tracing::debug!("Loading project config from {}", path.display());
            load_config_file(&path)?
        } else {
            ExtrasConfig::default()
        }
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}
