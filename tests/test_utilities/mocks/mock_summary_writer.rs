use sbom_license_enricher::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock SummaryWriter that keeps the last written rows
#[derive(Default, Clone)]
pub struct MockSummaryWriter {
    pub rows: Arc<Mutex<Vec<ResolvedComponent>>>,
}

impl MockSummaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_rows(&self) -> Vec<ResolvedComponent> {
        self.rows.lock().unwrap().clone()
    }
}

impl SummaryWriter for MockSummaryWriter {
    fn write_summary(&self, rows: &[ResolvedComponent], _path: &Path) -> Result<()> {
        *self.rows.lock().unwrap() = rows.to_vec();
        Ok(())
    }
}
