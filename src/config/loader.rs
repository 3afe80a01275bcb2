//! Config file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;

/// Load the config file, if any.
///
/// An explicitly passed path must parse; an auto-discovered file that
/// fails to parse is warned about and replaced with defaults, so a stray
/// broken config never blocks a run the user did not point at it.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(config) => Ok(config),
        Err(err) => {
            if config_path_provided {
                return Err(err);
            }
            tracing::warn!(
                "Ignoring auto-discovered config {}: {}",
                config_file.display(),
                err
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, honoring a nested `[tabcat]` section so the settings
/// can live inside a shared project file.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("tabcat") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, honoring a nested `tabcat` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("tabcat") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "tabcat.toml",
        ".tabcat.toml",
        "tabcat.yml",
        ".tabcat.yml",
        "tabcat.yaml",
        ".tabcat.yaml",
    ];

    for candidate in candidates {
        let path = search_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
