use crate::application::dto::{EnrichRequest, EnrichResponse};
use crate::license_resolution::domain::{Component, LicenseLabel, Manifest, ResolvedComponent};
use crate::license_resolution::policies::{LicenseNormalizer, PackageIdentifier};
use crate::license_resolution::services::LicenseResolver;
use crate::ports::outbound::{ManifestReader, ManifestWriter, ProgressReporter, SummaryWriter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// How a component ended up with its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Resolved through the engine; written back unless `UNKNOWN`
    Resolved,
    /// Declared license was already usable and left untouched
    Kept,
}

/// EnrichLicensesUseCase - drives license enrichment for a whole manifest
///
/// Every component name goes through the shared [`LicenseResolver`] with at
/// most `workers` resolutions in flight. A component that is still `UNKNOWN`
/// and carries a PURL gets a second attempt under the name derived from that
/// PURL. Known labels are written back to the manifest; every component gets
/// a summary row.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `MW` - ManifestWriter implementation
/// * `SW` - SummaryWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichLicensesUseCase<MR, MW, SW, PR> {
    manifest_reader: MR,
    manifest_writer: MW,
    summary_writer: SW,
    progress_reporter: PR,
    resolver: LicenseResolver,
}

impl<MR, MW, SW, PR> EnrichLicensesUseCase<MR, MW, SW, PR>
where
    MR: ManifestReader,
    MW: ManifestWriter,
    SW: SummaryWriter,
    PR: ProgressReporter,
{
    /// Creates a new EnrichLicensesUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        manifest_writer: MW,
        summary_writer: SW,
        progress_reporter: PR,
        resolver: LicenseResolver,
    ) -> Self {
        Self {
            manifest_reader,
            manifest_writer,
            summary_writer,
            progress_reporter,
            resolver,
        }
    }

    /// Executes the enrichment use case
    ///
    /// # Arguments
    /// * `request` - Input/output locations and run options
    ///
    /// # Returns
    /// EnrichResponse with the summary rows and the enriched manifest
    ///
    /// # Errors
    /// Only reading the manifest and writing the outputs can fail; resolution
    /// problems degrade to `UNKNOWN` for the affected component.
    pub async fn execute(&self, request: EnrichRequest) -> Result<EnrichResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.input.display()
        ));
        let manifest = self.manifest_reader.read_manifest(&request.input)?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            manifest.components().len()
        ));

        let (manifest, rows) = self
            .enrich_manifest(manifest, request.workers, request.keep_existing)
            .await?;

        self.manifest_writer
            .write_manifest(&manifest, &request.output_json)?;
        self.progress_reporter.report(&format!(
            "✅ Enriched SBOM written to: {}",
            request.output_json.display()
        ));

        self.summary_writer
            .write_summary(&rows, &request.output_csv)?;
        self.progress_reporter.report(&format!(
            "✅ License summary written to: {}",
            request.output_csv.display()
        ));

        Ok(EnrichResponse::new(rows, manifest))
    }

    /// Resolves every component and writes known labels back into `manifest`
    ///
    /// Rows come back in completion order.
    pub async fn enrich_manifest(
        &self,
        mut manifest: Manifest,
        workers: usize,
        keep_existing: bool,
    ) -> Result<(Manifest, Vec<ResolvedComponent>)> {
        let total = manifest.components().len();
        self.progress_reporter
            .report("🔍 Resolving license information...");

        let mut settled = Vec::with_capacity(total);
        {
            let mut in_flight = stream::iter(manifest.components().iter().enumerate())
                .map(|(index, component)| async move {
                    let (label, outcome) = self.resolve_component(component, keep_existing).await;
                    (index, component.name().to_string(), label, outcome)
                })
                .buffer_unordered(workers.max(1));

            while let Some(result) = in_flight.next().await {
                self.progress_reporter
                    .report_progress(settled.len() + 1, total, Some(result.1.as_str()));
                settled.push(result);
            }
        }

        let mut rows = Vec::with_capacity(total);
        for (index, name, label, outcome) in settled {
            if outcome == Outcome::Resolved && !label.is_unknown() {
                manifest.set_license(index, &label)?;
            }
            let version = manifest.components()[index].version().to_string();
            rows.push(ResolvedComponent::new(name, version, label));
        }

        let unknown = rows.iter().filter(|row| row.label.is_unknown()).count();
        if unknown > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} component(s) could not be resolved and remain UNKNOWN",
                unknown
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved licenses for {} component(s)",
                total
            ));
        }
        tracing::debug!(
            components = total,
            cached_names = self.resolver.cache_size(),
            "enrichment finished"
        );

        Ok((manifest, rows))
    }

    async fn resolve_component(
        &self,
        component: &Component,
        keep_existing: bool,
    ) -> (LicenseLabel, Outcome) {
        if keep_existing {
            if let Some(existing) = declared_label(component) {
                return (existing, Outcome::Kept);
            }
        }

        let label = self.resolver.resolve(component.name()).await;
        if !label.is_unknown() {
            return (label, Outcome::Resolved);
        }

        match component.purl().and_then(PackageIdentifier::lookup_name) {
            Some(derived) => {
                tracing::debug!(name = component.name(), %derived, "retrying with name from PURL");
                (self.resolver.resolve(&derived).await, Outcome::Resolved)
            }
            None => (label, Outcome::Resolved),
        }
    }
}

/// First declared license that normalizes to something other than `UNKNOWN`
fn declared_label(component: &Component) -> Option<LicenseLabel> {
    component
        .licenses()
        .iter()
        .map(|raw| LicenseNormalizer::normalize(Some(raw)))
        .find(|label| !label.is_unknown())
}
