/// Mock implementations for testing
mod mock_license_lookup;
mod mock_manifest_repository;
mod mock_progress_reporter;
mod mock_summary_writer;

pub use mock_license_lookup::MockLicenseLookup;
pub use mock_manifest_repository::{MockManifestReader, MockManifestWriter};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_summary_writer::MockSummaryWriter;
