/// Integration tests for the application layer
mod test_utilities;

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::mocks::*;
use sbom_license_enricher::prelude::*;

struct Sources {
    github: MockLicenseLookup,
    npm: MockLicenseLookup,
    go_dev: MockLicenseLookup,
}

impl Sources {
    fn new() -> Self {
        Self {
            github: MockLicenseLookup::new(LookupSource::RepositoryHost),
            npm: MockLicenseLookup::new(LookupSource::Registry),
            go_dev: MockLicenseLookup::new(LookupSource::DocumentationSite),
        }
    }

    fn resolver(&self, config: ResolverConfig) -> LicenseResolver {
        LicenseResolver::new(
            config,
            LookupSources::new(
                Arc::new(self.github.clone()),
                Arc::new(self.npm.clone()),
                Arc::new(self.go_dev.clone()),
            ),
        )
    }

    fn total_calls(&self) -> usize {
        self.github.call_count() + self.npm.call_count() + self.go_dev.call_count()
    }
}

fn request() -> EnrichRequest {
    EnrichRequest::new(
        PathBuf::from("sbom-cyclonedx.json"),
        PathBuf::from("sbom-cyclonedx-enriched.json"),
        PathBuf::from("sbom-license-enriched.csv"),
    )
}

fn label_of(rows: &[ResolvedComponent], name: &str) -> Option<String> {
    rows.iter()
        .find(|row| row.name == name)
        .map(|row| row.label.as_str().to_string())
}

#[tokio::test]
async fn test_enrich_happy_path() {
    let mut sources = Sources::new();
    sources.github = sources.github.with_license("github.com/golang/sync", "MIT");
    sources.npm = sources.npm.with_license("left-pad", "MIT");

    let manifest_writer = MockManifestWriter::new();
    let summary_writer = MockSummaryWriter::new();
    let progress_reporter = MockProgressReporter::new();

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.5",
            "components": [
                { "name": "vendor/lib-x", "version": "1.0.0" },
                { "name": "github.com/golang/sync", "version": "v0.7.0" },
                { "name": "left-pad", "version": "1.3.0" }
            ]
        })),
        manifest_writer.clone(),
        summary_writer.clone(),
        progress_reporter.clone(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.summary.total, 3);
    assert_eq!(response.summary.resolved, 3);
    assert_eq!(response.summary.unknown, 0);
    assert_eq!(response.summary.proprietary, 1);
    assert_eq!(
        response.summary.to_string(),
        "Summary: 3/3 resolved, 0 unknown, 1 proprietary"
    );

    let rows = summary_writer.get_rows();
    assert_eq!(label_of(&rows, "vendor/lib-x").as_deref(), Some("Proprietary"));
    assert_eq!(label_of(&rows, "github.com/golang/sync").as_deref(), Some("MIT"));
    assert_eq!(label_of(&rows, "left-pad").as_deref(), Some("MIT"));

    let written = manifest_writer.written_document().unwrap();
    assert_eq!(written["specVersion"], "1.5");
    assert_eq!(
        written["components"][2]["licenses"],
        json!([{ "license": { "id": "MIT" } }])
    );

    assert_eq!(progress_reporter.progress_updates(), 3);
    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Detected 3 component(s)")));
    assert!(messages.iter().any(|m| m.starts_with("Completed: ")));
}

#[tokio::test]
async fn test_vanity_path_is_looked_up_under_repository_name() {
    let mut sources = Sources::new();
    sources.github = sources.github.with_license("github.com/golang/sync", "BSD-3-Clause");

    let summary_writer = MockSummaryWriter::new();
    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [{ "name": "golang.org/x/sync", "version": "v0.7.0" }]
        })),
        MockManifestWriter::new(),
        summary_writer.clone(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig::default()),
    );

    use_case.execute(request()).await.unwrap();

    assert_eq!(sources.github.get_calls(), vec!["github.com/golang/sync"]);
    assert_eq!(sources.go_dev.call_count(), 0);
    assert_eq!(
        label_of(&summary_writer.get_rows(), "golang.org/x/sync").as_deref(),
        Some("BSD-3-Clause")
    );
}

#[tokio::test]
async fn test_repository_path_falls_back_to_documentation_site() {
    let mut sources = Sources::new();
    sources.go_dev = sources.go_dev.with_license("github.com/acme/gone", "Apache-2.0");

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [{ "name": "github.com/acme/gone", "version": "v1.0.0" }]
        })),
        MockManifestWriter::new(),
        MockSummaryWriter::new(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.rows[0].label.as_str(), "Apache-2.0");
    assert_eq!(sources.github.call_count(), 1);
    assert_eq!(sources.go_dev.call_count(), 1);
    assert_eq!(sources.npm.call_count(), 0);
}

#[tokio::test]
async fn test_module_prefix_skips_repository_host() {
    let mut sources = Sources::new();
    sources.go_dev = sources.go_dev.with_license("google.golang.org/grpc", "Apache-2.0");

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [{ "name": "google.golang.org/grpc", "version": "v1.64.0" }]
        })),
        MockManifestWriter::new(),
        MockSummaryWriter::new(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case.execute(request()).await.unwrap();
    assert_eq!(response.rows[0].label.as_str(), "Apache-2.0");
    assert_eq!(sources.github.call_count(), 0);
    assert_eq!(sources.npm.call_count(), 0);
}

#[tokio::test]
async fn test_purl_fallback() {
    let mut sources = Sources::new();
    sources.npm = sources.npm.with_license("hasown", "MIT");

    let manifest_writer = MockManifestWriter::new();
    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [
                { "name": "node_hasown", "version": "2.0.2", "purl": "pkg:npm/hasown@2.0.2" },
                { "name": "@types/node", "version": "20.0.0", "purl": "pkg:npm/%40types/node@20.0.0" }
            ]
        })),
        manifest_writer.clone(),
        MockSummaryWriter::new(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(label_of(&response.rows, "node_hasown").as_deref(), Some("MIT"));
    assert_eq!(sources.npm.calls_for("node_hasown"), 1);
    assert_eq!(sources.npm.calls_for("hasown"), 1);
    // Same derived name as the component name: the cached answer is reused
    assert_eq!(sources.npm.calls_for("@types/node"), 1);
    assert_eq!(response.summary.unknown, 1);

    let written = manifest_writer.written_document().unwrap();
    assert_eq!(
        written["components"][0]["licenses"],
        json!([{ "license": { "id": "MIT" } }])
    );
    assert!(written["components"][1].get("licenses").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_single_flight_across_workers() {
    let mut sources = Sources::new();
    sources.npm = sources
        .npm
        .with_license("left-pad", "MIT")
        .with_delay(Duration::from_millis(30));
    sources.github = sources
        .github
        .with_license("github.com/golang/sync", "BSD-3-Clause")
        .with_delay(Duration::from_millis(30));

    let components: Vec<Value> = (0..40)
        .map(|i| {
            let name = if i % 2 == 0 {
                "left-pad"
            } else {
                "github.com/golang/sync"
            };
            json!({ "name": name, "version": format!("{}.0.0", i) })
        })
        .collect();

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({ "components": components })),
        MockManifestWriter::new(),
        MockSummaryWriter::new(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case
        .execute(request().with_workers(16))
        .await
        .unwrap();

    assert_eq!(response.summary.total, 40);
    assert_eq!(response.summary.unknown, 0);
    assert_eq!(sources.npm.call_count(), 1);
    assert_eq!(sources.github.call_count(), 1);
    assert_eq!(sources.total_calls(), 2);
}

#[tokio::test]
async fn test_override_precedence() {
    let sources = Sources::new();
    let overrides = OverrideTable::from_pairs([
        ("internal-*", "Proprietary"),
        ("vendor/special-*", "MIT"),
    ])
    .unwrap();

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [
                { "name": "internal-tool", "version": "1.0.0" },
                { "name": "vendor/special-lib", "version": "1.0.0" }
            ]
        })),
        MockManifestWriter::new(),
        MockSummaryWriter::new(),
        MockProgressReporter::new(),
        sources.resolver(ResolverConfig {
            overrides,
            ..ResolverConfig::default()
        }),
    );

    let response = use_case.execute(request()).await.unwrap();
    assert_eq!(label_of(&response.rows, "internal-tool").as_deref(), Some("Proprietary"));
    assert_eq!(label_of(&response.rows, "vendor/special-lib").as_deref(), Some("MIT"));
    assert_eq!(sources.total_calls(), 0);
}

#[tokio::test]
async fn test_unknown_components_are_reported() {
    let sources = Sources::new();
    let progress_reporter = MockProgressReporter::new();

    let use_case = EnrichLicensesUseCase::new(
        MockManifestReader::new(json!({
            "components": [{ "name": "mystery", "version": "0.0.1" }]
        })),
        MockManifestWriter::new(),
        MockSummaryWriter::new(),
        progress_reporter.clone(),
        sources.resolver(ResolverConfig::default()),
    );

    let response = use_case.execute(request()).await.unwrap();
    assert!(response.has_unknown());
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error: ") && m.contains("remain UNKNOWN")));
}

#[tokio::test]
async fn test_filesystem_round_trip_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sbom-cyclonedx.json");
    let overrides = temp_dir.path().join("license_overrides.json");
    fs::write(
        &input,
        serde_json::to_string_pretty(&json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.5",
            "metadata": { "component": { "name": "app" } },
            "components": [
                { "type": "library", "name": "vendor/lib-x", "version": "1.0.0" },
                { "type": "library", "name": "github.com/golang/sync", "version": "v0.7.0" },
                { "type": "library", "name": "left-pad", "version": "1.3.0" },
                { "type": "library", "name": "acme-internal", "version": "2.0.0" }
            ]
        }))
        .unwrap(),
    )
    .unwrap();
    fs::write(&overrides, r#"{ "acme-*": "Proprietary" }"#).unwrap();

    let run = |suffix: &str| {
        let output_json = temp_dir.path().join(format!("enriched-{}.json", suffix));
        let output_csv = temp_dir.path().join(format!("licenses-{}.csv", suffix));
        let input = input.clone();
        let overrides = overrides.clone();
        async move {
            let mut sources = Sources::new();
            sources.github = sources.github.with_license("github.com/golang/sync", "BSD-3-Clause");
            sources.npm = sources.npm.with_license("left-pad", "MIT");

            let table = JsonOverrideFile::new().load_overrides(&overrides).unwrap();
            let use_case = EnrichLicensesUseCase::new(
                CycloneDxManifestRepository::new(),
                CycloneDxManifestRepository::new(),
                CsvSummaryWriter::new(),
                MockProgressReporter::new(),
                sources.resolver(ResolverConfig {
                    overrides: table,
                    ..ResolverConfig::default()
                }),
            );
            let response = use_case
                .execute(
                    EnrichRequest::new(input, output_json.clone(), output_csv.clone())
                        .with_workers(4),
                )
                .await
                .unwrap();

            let json = fs::read_to_string(&output_json).unwrap();
            let mut csv_lines: Vec<String> = fs::read_to_string(&output_csv)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect();
            csv_lines[1..].sort();
            (json, csv_lines, response.summary)
        }
    };

    let first = run("a").await;
    let second = run("b").await;

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
    assert_eq!(first.2.proprietary, 2);
    assert_eq!(first.1[0], "Package Name,Version,License");

    let written: Value = serde_json::from_str(&first.0).unwrap();
    let keys: Vec<&String> = written.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["bomFormat", "specVersion", "metadata", "components"]);
    assert_eq!(
        written["components"][3]["licenses"],
        json!([{ "license": { "id": "Proprietary" } }])
    );
}
