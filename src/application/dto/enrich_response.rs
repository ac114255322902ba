use crate::license_resolution::domain::{EnrichmentSummary, Manifest, ResolvedComponent};

/// EnrichResponse - Internal response DTO for the license enrichment use case
#[derive(Debug, Clone)]
pub struct EnrichResponse {
    /// One row per component, in completion order
    pub rows: Vec<ResolvedComponent>,
    pub summary: EnrichmentSummary,
    /// The enriched manifest as written
    pub manifest: Manifest,
}

impl EnrichResponse {
    pub fn new(rows: Vec<ResolvedComponent>, manifest: Manifest) -> Self {
        let summary = EnrichmentSummary::from_rows(&rows);
        Self {
            rows,
            summary,
            manifest,
        }
    }

    /// Whether any component is still `UNKNOWN`
    pub fn has_unknown(&self) -> bool {
        self.summary.unknown > 0
    }
}
