use super::http_fetcher::HttpFetcher;
use crate::license_resolution::domain::LicenseLabel;
use crate::license_resolution::policies::LicenseNormalizer;
use crate::ports::outbound::{LicenseLookup, LookupSource};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;

const REGISTRY_BASE: &str = "https://registry.npmjs.org";

/// NpmLicenseLookup adapter for the package-registry lookup
///
/// Reads the packument for a name and takes the license of the version
/// tagged `latest`, falling back to the top-level `license` field.
pub struct NpmLicenseLookup {
    fetcher: HttpFetcher,
}

impl NpmLicenseLookup {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            fetcher: HttpFetcher::new(timeout, headers)?,
        })
    }

    /// Registry URL for a package name
    ///
    /// Scoped names keep their `@` and encode the inner slash
    /// (`@types/node` → `@types%2Fnode`).
    pub fn packument_url(name: &str) -> String {
        let path = match name.strip_prefix('@').and_then(|rest| rest.split_once('/')) {
            Some((scope, package)) => format!(
                "@{}%2F{}",
                urlencoding::encode(scope),
                urlencoding::encode(package)
            ),
            None => urlencoding::encode(name).into_owned(),
        };
        format!("{}/{}", REGISTRY_BASE, path)
    }

    /// Extracts the label from a packument body
    pub fn license_from_packument(body: &Value) -> LicenseLabel {
        let latest_license = body
            .get("dist-tags")
            .and_then(|tags| tags.get("latest"))
            .and_then(Value::as_str)
            .and_then(|latest| body.get("versions")?.get(latest)?.get("license"));

        match latest_license {
            Some(value) => LicenseNormalizer::normalize_value(Some(value)),
            None => LicenseNormalizer::normalize_value(body.get("license")),
        }
    }

    async fn fetch(&self, name: &str) -> Result<LicenseLabel> {
        Ok(self
            .fetcher
            .get_json(&Self::packument_url(name))
            .await?
            .map(|body| Self::license_from_packument(&body))
            .unwrap_or_else(LicenseLabel::unknown))
    }
}

#[async_trait]
impl LicenseLookup for NpmLicenseLookup {
    fn source(&self) -> LookupSource {
        LookupSource::Registry
    }

    async fn lookup(&self, name: &str) -> LicenseLabel {
        if name.trim().is_empty() {
            return LicenseLabel::unknown();
        }

        match self.fetch(name).await {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!(name, error = %e, "npm registry lookup failed");
                LicenseLabel::unknown()
            }
        }
    }
}
