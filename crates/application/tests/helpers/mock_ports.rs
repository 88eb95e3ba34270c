#![allow(dead_code)]

use async_trait::async_trait;
use nameserver_sort_application::ports::{
    CandidateSource, ProbeMeasurement, ProbeTransport, ResultWriter,
};
use nameserver_sort_domain::{
    truncate_candidates, Candidate, DomainError, RankedResult, TransportProfile,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ProbeBehavior {
    Reply(f64),
    DelayedReply(Duration, f64),
    Fail,
    /// Sleeps for the given time and then reports a timeout.
    Timeout(Duration),
    Panic,
}

#[derive(Clone)]
pub struct MockProbeTransport {
    behaviors: Arc<Mutex<HashMap<String, ProbeBehavior>>>,
    calls: Arc<Mutex<Vec<(String, TransportProfile)>>>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

impl MockProbeTransport {
    pub fn new() -> Self {
        Self {
            behaviors: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_behaviors(behaviors: Vec<(&str, ProbeBehavior)>) -> Self {
        let transport = Self::new();
        for (address, behavior) in behaviors {
            transport.set_behavior(address, behavior);
        }
        transport
    }

    pub fn set_behavior(&self, address: &str, behavior: ProbeBehavior) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(address.to_string(), behavior);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn profile_for(&self, address: &str) -> Option<TransportProfile> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, p)| *p)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for MockProbeTransport {
    fn default() -> Self {
        Self::new()
    }
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProbeTransport for MockProbeTransport {
    async fn probe(
        &self,
        address: &Candidate,
        profile: &TransportProfile,
    ) -> Result<ProbeMeasurement, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((address.to_string(), *profile));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        let behavior = self
            .behaviors
            .lock()
            .unwrap()
            .get(address.as_str())
            .cloned()
            .unwrap_or(ProbeBehavior::Fail);

        match behavior {
            ProbeBehavior::Reply(latency) => Ok(ProbeMeasurement {
                average_latency_ms: latency,
                replies: 1,
            }),
            ProbeBehavior::DelayedReply(delay, latency) => {
                tokio::time::sleep(delay).await;
                Ok(ProbeMeasurement {
                    average_latency_ms: latency,
                    replies: 1,
                })
            }
            ProbeBehavior::Fail => Err(DomainError::ProbeFailed {
                address: address.to_string(),
                reason: "host unreachable".to_string(),
            }),
            ProbeBehavior::Timeout(delay) => {
                tokio::time::sleep(delay).await;
                Err(DomainError::ProbeTimeout {
                    address: address.to_string(),
                })
            }
            ProbeBehavior::Panic => panic!("probe exploded for {}", address),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub struct MockCandidateSource {
    listing: Option<String>,
    fetches: AtomicUsize,
}

impl MockCandidateSource {
    pub fn with_listing(listing: &str) -> Self {
        Self {
            listing: Some(listing.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            listing: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    async fn fetch_candidates(
        &self,
        country_code: &str,
        max_servers: usize,
    ) -> Result<Vec<Candidate>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.listing {
            Some(listing) if !listing.trim().is_empty() => {
                Ok(truncate_candidates(listing, max_servers))
            }
            _ => Err(DomainError::SourceUnavailable(format!(
                "empty listing for {}",
                country_code
            ))),
        }
    }
}

pub struct MockResultWriter {
    name: &'static str,
    fail: bool,
    written: Mutex<Vec<RankedResult>>,
}

impl MockResultWriter {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fail: false,
            written: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            fail: true,
            written: Mutex::new(Vec::new()),
        }
    }

    pub fn write_count(&self) -> usize {
        self.written.lock().unwrap().len()
    }
}

impl ResultWriter for MockResultWriter {
    fn write(&self, ranked: &RankedResult) -> Result<PathBuf, DomainError> {
        if self.fail {
            return Err(DomainError::OutputWrite {
                path: self.name.to_string(),
                reason: "disk full".to_string(),
            });
        }
        self.written.lock().unwrap().push(ranked.clone());
        Ok(PathBuf::from(self.name))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
