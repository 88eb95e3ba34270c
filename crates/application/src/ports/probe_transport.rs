use async_trait::async_trait;
use nameserver_sort_domain::{Candidate, DomainError, TransportProfile};

/// Measurement returned by a successful probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeMeasurement {
    pub average_latency_ms: f64,
    pub replies: u32,
}

/// Issues one liveness/latency probe against a single address.
///
/// Implementations enforce the profile: for `Ipv4OrHostname` the probe fails
/// when fewer than `min_replies` replies arrive within `timeout`. `Ipv6`
/// profiles run on the transport's own defaults.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn probe(
        &self,
        address: &Candidate,
        profile: &TransportProfile,
    ) -> Result<ProbeMeasurement, DomainError>;

    fn name(&self) -> &'static str;
}
