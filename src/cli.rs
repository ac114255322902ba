use clap::Parser;
use sbom_license_enricher::adapters::outbound::network::DEFAULT_TIMEOUT_SECS;
use sbom_license_enricher::config::{ConfigFile, TIMEOUT_RANGE, WORKERS_RANGE};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "sbom-cyclonedx.json";
pub const DEFAULT_OUTPUT_JSON: &str = "sbom-cyclonedx-enriched.json";
pub const DEFAULT_OUTPUT_CSV: &str = "sbom-license-enriched.csv";
pub const DEFAULT_OVERRIDES: &str = "license_overrides.json";
pub const DEFAULT_WORKERS: u64 = 10;

/// Enrich a CycloneDX SBOM with license identifiers
#[derive(Parser, Debug)]
#[command(name = "sbom-license-enricher")]
#[command(version)]
#[command(
    about = "Enrich a CycloneDX SBOM with licenses resolved from GitHub, npm and pkg.go.dev",
    long_about = None
)]
pub struct Args {
    /// CycloneDX JSON SBOM to enrich
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where to write the enriched SBOM
    #[arg(long, value_name = "FILE")]
    pub output_json: Option<PathBuf>,

    /// Where to write the license summary CSV
    #[arg(long, value_name = "FILE")]
    pub output_csv: Option<PathBuf>,

    /// JSON file mapping glob patterns to license ids, applied before any lookup
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Number of components resolved concurrently (1-64)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=64))]
    pub workers: Option<u64>,

    /// Timeout in seconds for each HTTP attempt (1-120); retried lookups may take several
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout: Option<u64>,

    /// Path to a config file (default: auto-discover sbom-license-enricher.config.yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep licenses already declared in the SBOM when they are recognisable
    #[arg(long)]
    pub keep_existing: bool,

    /// Exit with code 1 when any component is left UNKNOWN
    #[arg(long)]
    pub fail_on_unknown: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective run settings: CLI over config file over defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output_json: PathBuf,
    pub output_csv: PathBuf,
    pub overrides: PathBuf,
    pub workers: usize,
    pub timeout_secs: u64,
    pub keep_existing: bool,
    pub fail_on_unknown: bool,
    pub vanity_mappings: Vec<(String, String)>,
    pub module_prefixes: Vec<String>,
}

impl Args {
    /// Merges the parsed arguments with an optional config file
    pub fn into_settings(self, config: Option<ConfigFile>) -> Settings {
        let config = config.unwrap_or_default();

        let workers = self
            .workers
            .or(config.workers)
            .unwrap_or(DEFAULT_WORKERS)
            .clamp(*WORKERS_RANGE.start(), *WORKERS_RANGE.end());
        let timeout_secs = self
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(*TIMEOUT_RANGE.start(), *TIMEOUT_RANGE.end());

        Settings {
            input: self.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output_json: self
                .output_json
                .or(config.output_json)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_JSON)),
            output_csv: self
                .output_csv
                .or(config.output_csv)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_CSV)),
            overrides: self
                .overrides
                .or(config.overrides_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERRIDES)),
            workers: workers as usize,
            timeout_secs,
            keep_existing: self.keep_existing || config.keep_existing.unwrap_or(false),
            fail_on_unknown: self.fail_on_unknown,
            vanity_mappings: config
                .vanity_mappings
                .unwrap_or_default()
                .into_iter()
                .map(|entry| (entry.prefix, entry.replacement))
                .collect(),
            module_prefixes: config.module_prefixes.unwrap_or_default(),
        }
    }
}
