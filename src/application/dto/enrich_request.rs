use std::path::PathBuf;

/// Default number of components resolved concurrently
pub const DEFAULT_WORKERS: usize = 10;

/// EnrichRequest - Internal request DTO for the license enrichment use case
#[derive(Debug, Clone)]
pub struct EnrichRequest {
    /// CycloneDX JSON manifest to enrich
    pub input: PathBuf,
    /// Where the enriched manifest is written
    pub output_json: PathBuf,
    /// Where the `(name, version, license)` table is written
    pub output_csv: PathBuf,
    /// Maximum number of components resolved at the same time
    pub workers: usize,
    /// Keep licenses already declared in the manifest when they are known
    pub keep_existing: bool,
}

impl EnrichRequest {
    pub fn new(input: PathBuf, output_json: PathBuf, output_csv: PathBuf) -> Self {
        Self {
            input,
            output_json,
            output_csv,
            workers: DEFAULT_WORKERS,
            keep_existing: false,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_keep_existing(mut self, keep_existing: bool) -> Self {
        self.keep_existing = keep_existing;
        self
    }
}
