use async_trait::async_trait;
use nameserver_sort_application::ports::CandidateSource;
use nameserver_sort_domain::{truncate_candidates, Candidate, DomainError};
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("nameserver-sort/", env!("CARGO_PKG_VERSION"));

/// Reads per-country nameserver listings published as plain text, one
/// address per line (`<base_url>/<country>.txt`).
pub struct PublicDnsInfoSource {
    base_url: String,
    http_client: reqwest::Client,
}

impl PublicDnsInfoSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::SourceUnavailable(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn listing_url(&self, country_code: &str) -> String {
        format!(
            "{}/{}.txt",
            self.base_url,
            country_code.trim().to_ascii_lowercase()
        )
    }

    async fn fetch_listing(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::SourceUnavailable(format!("fetch error for {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::SourceUnavailable(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::SourceUnavailable(format!("read error for {}: {}", url, e)))
    }
}

#[async_trait]
impl CandidateSource for PublicDnsInfoSource {
    async fn fetch_candidates(
        &self,
        country_code: &str,
        max_servers: usize,
    ) -> Result<Vec<Candidate>, DomainError> {
        let url = self.listing_url(country_code);
        debug!(url = %url, "Fetching nameserver listing");

        let listing = self.fetch_listing(&url).await.inspect_err(|e| {
            warn!(url = %url, error = %e, "Nameserver listing unavailable");
        })?;

        if listing.trim().is_empty() {
            return Err(DomainError::SourceUnavailable(format!(
                "empty listing at {}",
                url
            )));
        }

        let listed = listing.lines().filter(|l| !l.trim().is_empty()).count();
        let candidates = truncate_candidates(&listing, max_servers);

        if candidates.len() < listed {
            debug!(
                listed,
                kept = candidates.len(),
                max_servers,
                "Listing truncated"
            );
        }
        info!(url = %url, candidates = candidates.len(), "Nameservers found");

        Ok(candidates)
    }
}
