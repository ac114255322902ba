use crate::license_resolution::domain::ResolvedComponent;
use crate::shared::Result;
use std::path::Path;

/// SummaryWriter port for the tabular `(name, version, label)` output
pub trait SummaryWriter {
    /// Writes one row per component, in the order given
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn write_summary(&self, rows: &[ResolvedComponent], path: &Path) -> Result<()>;
}
