/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core and the
/// enrichment use case use to reach external systems (network, file system, console).
pub mod license_lookup;
pub mod manifest_repository;
pub mod override_source;
pub mod progress_reporter;
pub mod summary_writer;

pub use license_lookup::{LicenseLookup, LookupSource};
pub use manifest_repository::{ManifestReader, ManifestWriter};
pub use override_source::OverrideSource;
pub use progress_reporter::ProgressReporter;
pub use summary_writer::SummaryWriter;
