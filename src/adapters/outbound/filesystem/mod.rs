/// Filesystem adapters for file I/O operations
mod csv_summary_writer;
mod cyclonedx_manifest;
mod override_file;

pub use csv_summary_writer::CsvSummaryWriter;
pub use cyclonedx_manifest::CycloneDxManifestRepository;
pub use override_file::JsonOverrideFile;
