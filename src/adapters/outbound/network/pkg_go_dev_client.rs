use super::http_fetcher::HttpFetcher;
use crate::license_resolution::domain::LicenseLabel;
use crate::license_resolution::policies::LicenseNormalizer;
use crate::ports::outbound::{LicenseLookup, LookupSource};
use crate::shared::Result;
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::HeaderMap;
use std::time::Duration;

const SITE_BASE: &str = "https://pkg.go.dev";

/// PkgGoDevLicenseLookup adapter for the documentation-site scrape
///
/// Fetches the licenses tab of a module page and looks for the first known
/// SPDX identifier in the visible text. Markup is stripped before matching so
/// identifiers inside attributes or script blocks are ignored.
pub struct PkgGoDevLicenseLookup {
    fetcher: HttpFetcher,
    scraper: LicenseScraper,
}

impl PkgGoDevLicenseLookup {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::new(timeout, HeaderMap::new())?,
            scraper: LicenseScraper::new()?,
        })
    }

    pub fn licenses_url(name: &str) -> String {
        format!("{}/{}?tab=licenses", SITE_BASE, name.trim_matches('/'))
    }

    async fn fetch(&self, name: &str) -> Result<LicenseLabel> {
        Ok(self
            .fetcher
            .get_text(&Self::licenses_url(name))
            .await?
            .map(|html| self.scraper.extract_license(&html))
            .unwrap_or_else(LicenseLabel::unknown))
    }
}

#[async_trait]
impl LicenseLookup for PkgGoDevLicenseLookup {
    fn source(&self) -> LookupSource {
        LookupSource::DocumentationSite
    }

    async fn lookup(&self, name: &str) -> LicenseLabel {
        if name.trim().is_empty() {
            return LicenseLabel::unknown();
        }

        match self.fetch(name).await {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!(name, error = %e, "pkg.go.dev scrape failed");
                LicenseLabel::unknown()
            }
        }
    }
}

/// Pure HTML → label extraction, kept apart from the fetcher for testing
pub struct LicenseScraper {
    markup: Regex,
    identifier: Regex,
}

impl LicenseScraper {
    pub fn new() -> Result<Self> {
        let markup = Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<[^>]*>")?;

        let alternatives = LicenseNormalizer::known_identifiers()
            .map(|id| {
                id.split('-')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join("[- ]")
            })
            .collect::<Vec<_>>()
            .join("|");
        // Identifiers may end in a digit or letter, so plain \b is not enough
        // around the dash-separated forms; require a non-identifier neighbour.
        let identifier = Regex::new(&format!(
            r"(?i)(?:^|[^A-Za-z0-9.\-])({})(?:$|[^A-Za-z0-9\-])",
            alternatives
        ))?;

        Ok(Self { markup, identifier })
    }

    /// First known identifier in the page text, normalized; `UNKNOWN` if none
    pub fn extract_license(&self, html: &str) -> LicenseLabel {
        let text = self.markup.replace_all(html, " ");

        match self
            .identifier
            .captures(&text)
            .and_then(|captures| captures.get(1))
        {
            Some(found) => {
                let token = found.as_str().to_uppercase().replace(' ', "-");
                LicenseNormalizer::normalize(Some(&token))
            }
            None => LicenseLabel::unknown(),
        }
    }
}
