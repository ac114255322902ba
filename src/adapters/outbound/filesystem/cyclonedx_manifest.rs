use crate::license_resolution::domain::Manifest;
use crate::ports::outbound::{ManifestReader, ManifestWriter};
use crate::shared::error::EnricherError;
use crate::shared::security::{read_regular_file, validate_output_target};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// CycloneDxManifestRepository adapter for CycloneDX JSON documents on disk
///
/// Reads are guarded against symlinks and oversized files. The document is
/// written back pretty-printed with its original key order.
pub struct CycloneDxManifestRepository;

impl CycloneDxManifestRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxManifestRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for CycloneDxManifestRepository {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        if fs::symlink_metadata(path).is_err() {
            return Err(EnricherError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Generate a CycloneDX JSON SBOM first or pass its location with --input"
                    .to_string(),
            }
            .into());
        }

        let content = read_regular_file(path, "SBOM manifest")?;

        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| EnricherError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Manifest::from_document(document).map_err(|e| {
            EnricherError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestWriter for CycloneDxManifestRepository {
    fn write_manifest(&self, manifest: &Manifest, path: &Path) -> Result<()> {
        validate_output_target(path)?;

        let mut content = manifest.to_pretty_json()?;
        content.push('\n');

        fs::write(path, content).map_err(|e| {
            EnricherError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
