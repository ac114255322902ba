use crate::license_resolution::domain::LicenseLabel;
use async_trait::async_trait;
use std::fmt;

/// The external sources a license can be looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// Repository-host metadata (GitHub `repos/{owner}/{repo}`)
    RepositoryHost,
    /// Package-registry metadata (npm registry)
    Registry,
    /// Documentation-site licenses tab (pkg.go.dev)
    DocumentationSite,
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupSource::RepositoryHost => write!(f, "repository-host"),
            LookupSource::Registry => write!(f, "registry"),
            LookupSource::DocumentationSite => write!(f, "documentation-site"),
        }
    }
}

/// LicenseLookup port for a single external license source
///
/// Lookups never fail: network errors, timeouts, unexpected statuses and
/// undecodable bodies all come back as `UNKNOWN`. Returned labels are
/// already normalized.
///
/// # Async Support
/// Implementations must be `Send + Sync` so one instance can serve every
/// concurrent worker.
#[async_trait]
pub trait LicenseLookup: Send + Sync {
    /// Which source this lookup queries
    fn source(&self) -> LookupSource;

    /// Looks up the license for `name`
    ///
    /// # Arguments
    /// * `name` - Lookup name (repository path, package name or module path)
    async fn lookup(&self, name: &str) -> LicenseLabel;
}
