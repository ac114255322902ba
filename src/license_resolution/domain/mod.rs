pub mod component;
pub mod enrichment_summary;
pub mod license_label;
pub mod override_rule;

pub use component::{Component, Manifest};
pub use enrichment_summary::{EnrichmentSummary, ResolvedComponent};
pub use license_label::LicenseLabel;
pub use override_rule::{OverrideRule, OverrideTable};
