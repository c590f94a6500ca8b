//! Configuration file support for melange-vex.
//!
//! Provides YAML-based configuration through `melange-vex.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use melange_vex::vex_generation::domain::VexConfig;
use melange_vex::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::{Args, DEFAULT_DISTRO};

const CONFIG_FILENAME: &str = "melange-vex.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub distro: Option<String>,
    pub author: Option<String>,
    pub author_role: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolve the effective VEX settings. Command-line values win over the config file.
pub fn resolve_vex_config(args: &Args, file: Option<ConfigFile>) -> VexConfig {
    let file = file.unwrap_or_default();

    VexConfig::new(
        args.distro
            .clone()
            .or(file.distro)
            .unwrap_or_else(|| DEFAULT_DISTRO.to_string()),
        args.author.clone().or(file.author).unwrap_or_default(),
        args.author_role
            .clone()
            .or(file.author_role)
            .unwrap_or_default(),
    )
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref distro) = config.distro {
        if distro.trim().is_empty() {
            bail!(
                "Invalid config: distro must not be empty.\n\n\
                 💡 Hint: Set 'distro' to a distribution namespace (e.g., \"wolfi\") or remove the key."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
