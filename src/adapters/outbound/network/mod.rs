/// Network adapters for the external license sources
mod github_client;
mod http_fetcher;
mod npm_client;
mod pkg_go_dev_client;

pub use github_client::GitHubLicenseLookup;
pub use http_fetcher::{HttpFetcher, DEFAULT_TIMEOUT_SECS};
pub use npm_client::NpmLicenseLookup;
pub use pkg_go_dev_client::{LicenseScraper, PkgGoDevLicenseLookup};
