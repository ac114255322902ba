use sbom_license_enricher::prelude::*;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock ManifestReader returning a fixed document
pub struct MockManifestReader {
    document: Value,
}

impl MockManifestReader {
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<Manifest> {
        Manifest::from_document(self.document.clone())
    }
}

/// Mock ManifestWriter that keeps the last written document
#[derive(Default, Clone)]
pub struct MockManifestWriter {
    pub written: Arc<Mutex<Option<Value>>>,
}

impl MockManifestWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_document(&self) -> Option<Value> {
        self.written.lock().unwrap().clone()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn write_manifest(&self, manifest: &Manifest, _path: &Path) -> Result<()> {
        *self.written.lock().unwrap() = Some(manifest.document().clone());
        Ok(())
    }
}
