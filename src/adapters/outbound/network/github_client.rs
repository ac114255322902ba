use super::http_fetcher::HttpFetcher;
use crate::license_resolution::domain::LicenseLabel;
use crate::license_resolution::policies::LicenseNormalizer;
use crate::ports::outbound::{LicenseLookup, LookupSource};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;

const API_BASE: &str = "https://api.github.com";

/// SPDX id GitHub reports when it detected a license file it could not classify
const NO_ASSERTION: &str = "NOASSERTION";

/// GitHubLicenseLookup adapter for the repository-host lookup
///
/// Answers for names of the shape `github.com/{owner}/{repo}[/...]` using
/// the `repos/{owner}/{repo}` REST endpoint. Anything else is `UNKNOWN`.
///
/// # Authentication
/// An optional token raises the API rate limit. Without one the lookup still
/// works against the unauthenticated quota.
pub struct GitHubLicenseLookup {
    fetcher: HttpFetcher,
}

impl GitHubLicenseLookup {
    pub fn new(timeout: Duration, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| anyhow::anyhow!("GITHUB_TOKEN contains invalid header characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self {
            fetcher: HttpFetcher::new(timeout, headers)?,
        })
    }

    /// Splits `github.com/{owner}/{repo}/...` into owner and repo
    pub fn owner_repo(name: &str) -> Option<(&str, &str)> {
        let mut parts = name.split('/');
        if parts.next()? != "github.com" {
            return None;
        }
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let repo = parts.next().filter(|s| !s.is_empty())?;
        Some((owner, repo))
    }

    /// Extracts the label from a `repos/{owner}/{repo}` response body
    pub fn license_from_repository(body: &Value) -> LicenseLabel {
        let spdx_id = body
            .get("license")
            .and_then(|license| license.get("spdx_id"))
            .and_then(Value::as_str);

        match spdx_id {
            Some(id) if id.eq_ignore_ascii_case(NO_ASSERTION) => LicenseLabel::unknown(),
            other => LicenseNormalizer::normalize(other),
        }
    }

    async fn fetch(&self, owner: &str, repo: &str) -> Result<LicenseLabel> {
        let url = format!(
            "{}/repos/{}/{}",
            API_BASE,
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );
        Ok(self
            .fetcher
            .get_json(&url)
            .await?
            .map(|body| Self::license_from_repository(&body))
            .unwrap_or_else(LicenseLabel::unknown))
    }
}

#[async_trait]
impl LicenseLookup for GitHubLicenseLookup {
    fn source(&self) -> LookupSource {
        LookupSource::RepositoryHost
    }

    async fn lookup(&self, name: &str) -> LicenseLabel {
        let Some((owner, repo)) = Self::owner_repo(name) else {
            return LicenseLabel::unknown();
        };

        match self.fetch(owner, repo).await {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!(name, error = %e, "GitHub license lookup failed");
                LicenseLabel::unknown()
            }
        }
    }
}
