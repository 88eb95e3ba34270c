use super::probe::{ProbeEngine, ResultAggregator};
use crate::ports::CandidateSource;
use nameserver_sort_domain::{DomainError, ProbeSettings, RankedResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Fetches the candidates for a country, probes them all and ranks the
/// reachable ones by latency.
pub struct RankNameserversUseCase {
    source: Arc<dyn CandidateSource>,
    engine: ProbeEngine,
}

impl RankNameserversUseCase {
    pub fn new(source: Arc<dyn CandidateSource>, engine: ProbeEngine) -> Self {
        Self { source, engine }
    }

    /// A failed fetch aborts the run before any probe is issued. An empty
    /// ranking is returned as-is; callers decide how to report it. That
    /// includes a listing cut down to nothing by `max_servers`.
    pub async fn execute(
        &self,
        country_code: &str,
        max_servers: usize,
        settings: ProbeSettings,
    ) -> Result<RankedResult, DomainError> {
        let candidates = self
            .source
            .fetch_candidates(country_code, max_servers)
            .await?;

        if candidates.is_empty() {
            warn!(
                country = %country_code,
                max_servers,
                "No candidates left to probe"
            );
            return Ok(RankedResult::default());
        }

        info!(
            country = %country_code,
            candidates = candidates.len(),
            timeout_secs = settings.timeout_secs,
            min_replies = settings.min_replies,
            "Probing nameservers"
        );

        let start = Instant::now();
        let pending = self.engine.launch(&candidates, settings);
        let ranked = ResultAggregator::new(pending).collect().await;

        match ranked.fastest() {
            Some(fastest) => info!(
                reachable = ranked.len(),
                unreachable = candidates.len() - ranked.len(),
                fastest = %fastest.address,
                average_ms = fastest.average,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Nameservers ranked"
            ),
            None => warn!(
                candidates = candidates.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "No nameserver answered"
            ),
        }

        Ok(ranked)
    }
}
