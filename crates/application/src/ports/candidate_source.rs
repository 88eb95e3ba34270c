use async_trait::async_trait;
use nameserver_sort_domain::{Candidate, DomainError};

/// Supplies the candidate nameservers for a country.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Returns at most `max_servers - 1` candidates when the listing is longer
    /// than `max_servers`. An unreachable or empty listing is
    /// `DomainError::SourceUnavailable`.
    async fn fetch_candidates(
        &self,
        country_code: &str,
        max_servers: usize,
    ) -> Result<Vec<Candidate>, DomainError>;
}
