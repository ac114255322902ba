use crate::license_resolution::domain::LicenseLabel;
use std::fmt;

/// One summary row: the final label for a component
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub name: String,
    pub version: String,
    pub label: LicenseLabel,
}

impl ResolvedComponent {
    pub fn new(name: String, version: String, label: LicenseLabel) -> Self {
        Self {
            name,
            version,
            label,
        }
    }
}

/// Counts reported at the end of a run.
///
/// `resolved` is everything not `UNKNOWN`, so proprietary components count
/// as resolved as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnrichmentSummary {
    pub total: usize,
    pub resolved: usize,
    pub unknown: usize,
    pub proprietary: usize,
}

impl EnrichmentSummary {
    pub fn from_rows(rows: &[ResolvedComponent]) -> Self {
        let total = rows.len();
        let unknown = rows.iter().filter(|r| r.label.is_unknown()).count();
        let proprietary = rows.iter().filter(|r| r.label.is_proprietary()).count();

        Self {
            total,
            resolved: total - unknown,
            unknown,
            proprietary,
        }
    }
}

impl fmt::Display for EnrichmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {}/{} resolved, {} unknown, {} proprietary",
            self.resolved, self.total, self.unknown, self.proprietary
        )
    }
}
