use crate::shared::Result;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::time::Duration;

/// Default per-request timeout for every lookup
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Attempts per request, so a lookup can take up to this many timeouts
const MAX_ATTEMPTS: u32 = 3;

/// Thin wrapper around an async reqwest client with bounded retries.
///
/// Network errors, 429 and 5xx responses are retried with a linear backoff.
/// 404 is a definite answer and comes back as `Ok(None)`; any other non-success
/// status is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_attempts: u32,
}

impl HttpFetcher {
    /// Creates a fetcher with the given timeout and default headers
    pub fn new(timeout: Duration, headers: HeaderMap) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-license-enricher/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// GETs `url` and decodes the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<Option<serde_json::Value>> {
        match self.get_with_retry(url).await? {
            Some(response) => Ok(Some(response.json().await?)),
            None => Ok(None),
        }
    }

    /// GETs `url` and returns the body as text
    pub async fn get_text(&self, url: &str) -> Result<Option<String>> {
        match self.get_with_retry(url).await? {
            Some(response) => Ok(Some(response.text().await?)),
            None => Ok(None),
        }
    }

    async fn get_with_retry(&self, url: &str) -> Result<Option<reqwest::Response>> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => return Ok(Some(response)),
                Ok(response) if response.status() == StatusCode::NOT_FOUND => return Ok(None),
                Ok(response) if is_retryable(response.status()) => {
                    last_error = Some(anyhow::anyhow!(
                        "{} returned status code {}",
                        url,
                        response.status()
                    ));
                }
                Ok(response) => {
                    anyhow::bail!("{} returned status code {}", url, response.status());
                }
                Err(e) => last_error = Some(e.into()),
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no request attempted for {}", url)))
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}
