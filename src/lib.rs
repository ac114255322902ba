//! sbom-license-enricher - license enrichment for CycloneDX SBOMs
//!
//! This library fills in the license of every component of a CycloneDX JSON
//! SBOM. Each component name goes through an ordered fallback chain: operator
//! overrides, internal/vendor classification, GitHub repository metadata,
//! the pkg.go.dev licenses tab and the npm registry. A single-flight cache
//! makes sure every name is looked up at most once per run, however many
//! components share it.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Resolution core** (`license_resolution`): labels, override rules,
//!   normalization and classification policies, the resolution engine
//! - **Application Layer** (`application`): the enrichment use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_license_enricher::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let timeout = Duration::from_secs(10);
//! let sources = LookupSources::new(
//!     Arc::new(GitHubLicenseLookup::new(timeout, None)?),
//!     Arc::new(NpmLicenseLookup::new(timeout)?),
//!     Arc::new(PkgGoDevLicenseLookup::new(timeout)?),
//! );
//! let resolver = LicenseResolver::new(ResolverConfig::default(), sources);
//!
//! let use_case = EnrichLicensesUseCase::new(
//!     CycloneDxManifestRepository::new(),
//!     CycloneDxManifestRepository::new(),
//!     CsvSummaryWriter::new(),
//!     StderrProgressReporter::new(),
//!     resolver,
//! );
//!
//! let request = EnrichRequest::new(
//!     PathBuf::from("sbom-cyclonedx.json"),
//!     PathBuf::from("sbom-cyclonedx-enriched.json"),
//!     PathBuf::from("sbom-license-enriched.csv"),
//! );
//! let response = use_case.execute(request).await?;
//! println!("{}", response.summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvSummaryWriter, CycloneDxManifestRepository, JsonOverrideFile,
    };
    pub use crate::adapters::outbound::network::{
        GitHubLicenseLookup, NpmLicenseLookup, PkgGoDevLicenseLookup,
    };
    pub use crate::application::dto::{EnrichRequest, EnrichResponse};
    pub use crate::application::use_cases::EnrichLicensesUseCase;
    pub use crate::license_resolution::domain::{
        Component, EnrichmentSummary, LicenseLabel, Manifest, OverrideRule, OverrideTable,
        ResolvedComponent,
    };
    pub use crate::license_resolution::policies::{
        InternalClassifier, LicenseNormalizer, PackageIdentifier, VanityMappings,
    };
    pub use crate::license_resolution::services::{
        LicenseResolver, LookupSources, ResolutionPlan, ResolutionPlanner, ResolverConfig,
    };
    pub use crate::ports::outbound::{
        LicenseLookup, LookupSource, ManifestReader, ManifestWriter, OverrideSource,
        ProgressReporter, SummaryWriter,
    };
    pub use crate::shared::Result;
}
