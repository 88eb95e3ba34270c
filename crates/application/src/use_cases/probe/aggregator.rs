use super::engine::PendingProbes;
use nameserver_sort_domain::{ProbeOutcome, ProbeStatus, RankedResult, RankedServer};
use tracing::debug;

/// Barrier over a batch of launched probes.
///
/// Holds the batch while probes are outstanding; [`collect`](Self::collect)
/// consumes it, so an aggregator completes exactly once.
pub struct ResultAggregator {
    pending: PendingProbes,
}

impl ResultAggregator {
    pub fn new(pending: PendingProbes) -> Self {
        Self { pending }
    }

    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Waits for every probe to settle, then ranks the reachable ones.
    pub async fn collect(self) -> RankedResult {
        let outcomes = self.pending.settle().await;
        Self::rank(outcomes)
    }

    /// Drops unreachable outcomes and orders the rest by ascending latency.
    ///
    /// The sort is stable: equal latencies keep their input order.
    pub fn rank(outcomes: Vec<ProbeOutcome>) -> RankedResult {
        let total = outcomes.len();

        let mut servers: Vec<RankedServer> = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome.status {
                ProbeStatus::Success { latency_ms } if latency_ms.is_finite() => {
                    Some(RankedServer {
                        address: outcome.address.as_arc(),
                        average: latency_ms,
                    })
                }
                _ => None,
            })
            .collect();

        servers.sort_by(|a, b| a.average.total_cmp(&b.average));

        debug!(
            probed = total,
            reachable = servers.len(),
            "Probe results aggregated"
        );

        RankedResult::from_sorted(servers)
    }
}
