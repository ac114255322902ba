mod cli;

use clap::Parser;
use cli::{Args, Settings};
use owo_colors::OwoColorize;
use sbom_license_enricher::adapters::outbound::console::StderrProgressReporter;
use sbom_license_enricher::adapters::outbound::filesystem::{
    CsvSummaryWriter, CycloneDxManifestRepository, JsonOverrideFile,
};
use sbom_license_enricher::adapters::outbound::network::{
    GitHubLicenseLookup, NpmLicenseLookup, PkgGoDevLicenseLookup,
};
use sbom_license_enricher::application::dto::EnrichRequest;
use sbom_license_enricher::application::use_cases::EnrichLicensesUseCase;
use sbom_license_enricher::config::{discover_config, load_config_from_path};
use sbom_license_enricher::license_resolution::domain::{EnrichmentSummary, OverrideTable};
use sbom_license_enricher::license_resolution::policies::VanityMappings;
use sbom_license_enricher::license_resolution::services::{
    LicenseResolver, LookupSources, ResolverConfig,
};
use sbom_license_enricher::ports::outbound::OverrideSource;
use sbom_license_enricher::shared::error::ExitCode;
use sbom_license_enricher::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    // A .env file may carry the GitHub token; real environment variables win
    dotenvy::dotenv().ok();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = args.into_settings(config);

    let resolver = build_resolver(&settings)?;

    let use_case = EnrichLicensesUseCase::new(
        CycloneDxManifestRepository::new(),
        CycloneDxManifestRepository::new(),
        CsvSummaryWriter::new(),
        StderrProgressReporter::new(),
        resolver,
    );

    let request = EnrichRequest::new(
        settings.input.clone(),
        settings.output_json.clone(),
        settings.output_csv.clone(),
    )
    .with_workers(settings.workers)
    .with_keep_existing(settings.keep_existing);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(use_case.execute(request))?;

    print_summary(&response.summary);

    if settings.fail_on_unknown && response.has_unknown() {
        return Ok(ExitCode::UnknownLicensesFound);
    }
    Ok(ExitCode::Success)
}

fn build_resolver(settings: &Settings) -> Result<LicenseResolver> {
    let timeout = Duration::from_secs(settings.timeout_secs);
    let token = std::env::var(TOKEN_ENV_VAR).ok();
    if token.is_none() {
        tracing::debug!("{} not set, using unauthenticated GitHub requests", TOKEN_ENV_VAR);
    }

    let sources = LookupSources::new(
        Arc::new(GitHubLicenseLookup::new(timeout, token.as_deref())?),
        Arc::new(NpmLicenseLookup::new(timeout)?),
        Arc::new(PkgGoDevLicenseLookup::new(timeout)?),
    );

    let config = ResolverConfig {
        overrides: load_overrides(&settings.overrides),
        vanity_mappings: VanityMappings::default().with_entries(settings.vanity_mappings.clone()),
        extra_module_prefixes: settings.module_prefixes.clone(),
    };

    Ok(LicenseResolver::new(config, sources))
}

/// An unreadable override file never aborts the run
fn load_overrides(path: &Path) -> OverrideTable {
    match JsonOverrideFile::new().load_overrides(path) {
        Ok(table) => {
            if !table.is_empty() {
                eprintln!(
                    "📋 Loaded {} license override(s) from {}",
                    table.len(),
                    path.display()
                );
            }
            table
        }
        Err(e) => {
            eprintln!(
                "⚠️  Warning: Ignoring override file {}: {}",
                path.display(),
                e
            );
            OverrideTable::empty()
        }
    }
}

/// The summary is the only thing written to stdout
fn print_summary(summary: &EnrichmentSummary) {
    let line = summary.to_string();
    if !std::io::stdout().is_terminal() {
        println!("{}", line);
    } else if summary.unknown > 0 {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.green());
    }
}
