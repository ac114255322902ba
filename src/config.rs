//! Configuration file support for sbom-license-enricher.
//!
//! Provides YAML-based configuration through `sbom-license-enricher.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::EnricherError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-license-enricher.config.yml";

/// Accepted range for the number of concurrent workers
pub const WORKERS_RANGE: std::ops::RangeInclusive<u64> = 1..=64;

/// Accepted range for the per-request timeout in seconds
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=120;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub workers: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub overrides_file: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
    pub output_csv: Option<PathBuf>,
    pub keep_existing: Option<bool>,
    /// Extra vanity prefixes, tried after the built-in ones
    pub vanity_mappings: Option<Vec<VanityMappingEntry>>,
    /// Extra module prefixes resolved through the documentation site
    pub module_prefixes: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One vanity import prefix and the repository prefix it stands for.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VanityMappingEntry {
    pub prefix: String,
    pub replacement: String,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

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

fn invalid(message: String, hint: &str) -> anyhow::Error {
    EnricherError::InvalidConfig {
        message,
        hint: hint.to_string(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(workers) = config.workers {
        if !WORKERS_RANGE.contains(&workers) {
            return Err(invalid(
                format!("workers must be between 1 and 64, got {}", workers),
                "Lower the value or remove it to use the default of 10",
            ));
        }
    }

    if let Some(timeout) = config.timeout_secs {
        if !TIMEOUT_RANGE.contains(&timeout) {
            return Err(invalid(
                format!("timeout_secs must be between 1 and 120, got {}", timeout),
                "Lower the value or remove it to use the default of 10 seconds",
            ));
        }
    }

    if let Some(ref mappings) = config.vanity_mappings {
        for (i, entry) in mappings.iter().enumerate() {
            if entry.prefix.trim().is_empty() || entry.replacement.trim().is_empty() {
                return Err(invalid(
                    format!("vanity_mappings[{}] has an empty prefix or replacement", i),
                    "Each entry needs both fields, e.g. { prefix: \"honnef.co/go/\", replacement: \"github.com/dominikh/go-\" }",
                ));
            }
        }
    }

    if let Some(ref prefixes) = config.module_prefixes {
        if let Some(i) = prefixes.iter().position(|p| p.trim().is_empty()) {
            return Err(invalid(
                format!("module_prefixes[{}] must not be empty", i),
                "An empty prefix would send every component to the documentation site",
            ));
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
