use crate::license_resolution::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading the SBOM to enrich
pub trait ManifestReader {
    /// Reads and parses the SBOM manifest at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a CycloneDX-shaped JSON document
    fn read_manifest(&self, path: &Path) -> Result<Manifest>;
}

/// ManifestWriter port for persisting the enriched SBOM
pub trait ManifestWriter {
    /// Writes the manifest document to `path`
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails
    fn write_manifest(&self, manifest: &Manifest, path: &Path) -> Result<()>;
}
