use crate::license_resolution::domain::{LicenseLabel, OverrideRule, OverrideTable};
use crate::ports::outbound::OverrideSource;
use crate::shared::error::EnricherError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// JsonOverrideFile adapter for `{ "<glob>": "<license>" }` override files
///
/// Rules keep the key order of the file. Entries whose value is not a string
/// or whose pattern does not compile are skipped with a warning; the rest of
/// the file still applies.
pub struct JsonOverrideFile;

impl JsonOverrideFile {
    pub fn new() -> Self {
        Self
    }

    /// Parses override file content into a table
    pub fn parse(content: &str) -> Result<OverrideTable> {
        let document: Value = serde_json::from_str(content)?;
        let entries = document
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("override file must contain a JSON object"))?;

        let mut rules = Vec::with_capacity(entries.len());
        for (pattern, value) in entries {
            let Some(license) = value.as_str() else {
                tracing::warn!(%pattern, "override value is not a string, skipping");
                continue;
            };
            match OverrideRule::new(pattern.as_str(), LicenseLabel::new(license)) {
                Ok(rule) => rules.push(rule),
                Err(e) => tracing::warn!(%pattern, error = %e, "invalid override pattern, skipping"),
            }
        }

        Ok(OverrideTable::new(rules))
    }
}

impl Default for JsonOverrideFile {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrideSource for JsonOverrideFile {
    fn load_overrides(&self, path: &Path) -> Result<OverrideTable> {
        if fs::symlink_metadata(path).is_err() {
            tracing::debug!(path = %path.display(), "no override file, continuing without overrides");
            return Ok(OverrideTable::empty());
        }

        let content = read_regular_file(path, "override file")?;
        Self::parse(&content).map_err(|e| {
            EnricherError::InvalidConfig {
                message: format!("{}: {}", path.display(), e),
                hint: "The override file must be a JSON object mapping glob patterns to license ids"
                    .to_string(),
            }
            .into()
        })
    }
}
