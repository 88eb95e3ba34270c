use crate::ports::ProbeTransport;
use futures::future::join_all;
use nameserver_sort_domain::{Candidate, ProbeOutcome, ProbeSettings, TransportProfile};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fans out one probe task per candidate and turns every result, good or bad,
/// into a [`ProbeOutcome`].
pub struct ProbeEngine {
    transport: Arc<dyn ProbeTransport>,
    limiter: Option<Arc<Semaphore>>,
}

impl ProbeEngine {
    pub fn new(transport: Arc<dyn ProbeTransport>) -> Self {
        Self {
            transport,
            limiter: None,
        }
    }

    /// Caps simultaneous probes. Every candidate still gets its own task;
    /// tasks past the cap wait for a permit before touching the network.
    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.limiter = Some(Arc::new(Semaphore::new(limit.max(1))));
        self
    }

    /// Spawns every probe and returns without waiting for any of them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn launch(&self, candidates: &[Candidate], settings: ProbeSettings) -> PendingProbes {
        debug!(
            candidates = candidates.len(),
            transport = self.transport.name(),
            "Launching probes"
        );

        let tasks = candidates
            .iter()
            .map(|candidate| {
                let transport = Arc::clone(&self.transport);
                let limiter = self.limiter.clone();
                let address = candidate.clone();
                let handle = tokio::spawn(async move {
                    let _permit = match limiter {
                        Some(semaphore) => match semaphore.acquire_owned().await {
                            Ok(permit) => Some(permit),
                            Err(_) => return ProbeOutcome::unreachable(address),
                        },
                        None => None,
                    };
                    probe_one(transport.as_ref(), address, &settings).await
                });
                (candidate.clone(), handle)
            })
            .collect();

        PendingProbes { tasks }
    }

    /// Probes every candidate concurrently and waits for all of them.
    ///
    /// Outcomes come back in input order.
    pub async fn probe_all(
        &self,
        candidates: &[Candidate],
        settings: ProbeSettings,
    ) -> Vec<ProbeOutcome> {
        self.launch(candidates, settings).settle().await
    }
}

async fn probe_one(
    transport: &dyn ProbeTransport,
    address: Candidate,
    settings: &ProbeSettings,
) -> ProbeOutcome {
    let profile = TransportProfile::for_address(address.as_str(), settings);
    debug!(address = %address, family = %profile.family(), "Probing");

    match transport.probe(&address, &profile).await {
        Ok(measurement) => {
            debug!(
                address = %address,
                latency_ms = measurement.average_latency_ms,
                replies = measurement.replies,
                "Probe OK"
            );
            ProbeOutcome::success(address, measurement.average_latency_ms)
        }
        Err(e) => {
            debug!(address = %address, error = %e, "Probe failed");
            ProbeOutcome::unreachable(address)
        }
    }
}

/// Probes that have been launched but not yet awaited.
pub struct PendingProbes {
    tasks: Vec<(Candidate, JoinHandle<ProbeOutcome>)>,
}

impl PendingProbes {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Waits for every probe to settle. A task that panicked or was aborted
    /// settles as unreachable.
    pub async fn settle(self) -> Vec<ProbeOutcome> {
        let (addresses, handles): (Vec<Candidate>, Vec<JoinHandle<ProbeOutcome>>) =
            self.tasks.into_iter().unzip();

        join_all(handles)
            .await
            .into_iter()
            .zip(addresses)
            .map(|(joined, address)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(address = %address, error = %e, "Probe task did not complete");
                    ProbeOutcome::unreachable(address)
                }
            })
            .collect()
    }

    /// Aborts every probe that has not finished yet.
    pub fn abort_all(&self) {
        for (_, handle) in &self.tasks {
            handle.abort();
        }
    }
}
