//! Configuration file support for depaware.
//!
//! Provides YAML-based configuration through `depaware.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags into the immutable [`AuditConfig`].

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::AuditConfig;
use crate::cli::Args;
use crate::dependency_audit::domain::TargetConfig;
use crate::shared::error::AuditError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depaware.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub goos: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub internal: Option<bool>,
    pub file: Option<String>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A config file together with the path it was loaded from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub file: ConfigFile,
}

fn invalid(path: &Path, reason: String) -> anyhow::Error {
    AuditError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<LoadedConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| invalid(path, format!("Failed to read config file: {}", e)))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .map_err(|e| invalid(path, format!("Failed to parse config file: {}", e)))?;

    validate_config(&config).map_err(|reason| invalid(path, reason))?;
    warn_unknown_fields(&config);

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        file: config,
    })
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<LoadedConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    if let Some(ref goos) = config.goos {
        if let Some(i) = goos.iter().position(|name| name.trim().is_empty()) {
            return Err(format!("goos[{}] must not be empty", i));
        }
    }
    if let Some(ref file) = config.file {
        if file.trim().is_empty() {
            return Err("file must not be empty".to_string());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Builds the run configuration: command-line flags win over the config
/// file, which wins over built-in defaults.
pub fn merge_config(args: &Args, loaded: Option<LoadedConfig>) -> Result<AuditConfig> {
    let mut config = AuditConfig::with_defaults()?;
    config.mode = args.mode();
    config.verbose = args.verbose;

    if let Some(LoadedConfig { path, file }) = loaded {
        if let Some(goos) = file.goos {
            config.targets = goos
                .into_iter()
                .map(TargetConfig::new)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| invalid(&path, e.to_string()))?;
        }
        if let Some(tags) = file.tags {
            config.build_tags = tags;
        }
        if let Some(internal) = file.internal {
            config.include_internal = internal;
        }
        if let Some(name) = file.file {
            config.snapshot_file_name = name;
        }
        if let Some(color) = file.color {
            config.color = color;
        }
    }

    if let Some(ref goos) = args.goos {
        config.targets = TargetConfig::parse_list(goos)?;
    }
    if let Some(tags) = args.build_tags() {
        config.build_tags = tags;
    }
    if let Some(ref name) = args.file {
        if name.trim().is_empty() {
            return Err(AuditError::InvalidArgument {
                argument: "--file".to_string(),
                reason: "snapshot file name must not be empty".to_string(),
                hint: "Omit --file to use depaware.txt".to_string(),
            }
            .into());
        }
        config.snapshot_file_name = name.clone();
    }
    config.include_internal |= args.internal;
    config.color |= args.color;

    Ok(config)
}
