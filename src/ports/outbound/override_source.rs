use crate::license_resolution::domain::OverrideTable;
use crate::shared::Result;
use std::path::Path;

/// OverrideSource port for operator-supplied license overrides
///
/// Implementations return an empty table when the source does not exist.
pub trait OverrideSource {
    /// Loads the override rules in their declared order
    ///
    /// # Errors
    /// Returns an error if the source exists but cannot be read or parsed.
    /// Callers are expected to degrade to an empty table.
    fn load_overrides(&self, path: &Path) -> Result<OverrideTable>;
}
