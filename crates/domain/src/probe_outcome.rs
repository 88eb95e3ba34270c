use crate::candidate::Candidate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeStatus {
    Success { latency_ms: f64 },
    Unreachable,
}

/// Result of probing one candidate. Created once by the probe engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub address: Candidate,
    pub status: ProbeStatus,
}

impl ProbeOutcome {
    /// Non-finite latencies cannot be ranked and are recorded as unreachable.
    pub fn success(address: Candidate, latency_ms: f64) -> Self {
        let status = if latency_ms.is_finite() && latency_ms >= 0.0 {
            ProbeStatus::Success { latency_ms }
        } else {
            ProbeStatus::Unreachable
        };
        Self { address, status }
    }

    pub fn unreachable(address: Candidate) -> Self {
        Self {
            address,
            status: ProbeStatus::Unreachable,
        }
    }

    pub fn latency_ms(&self) -> Option<f64> {
        match self.status {
            ProbeStatus::Success { latency_ms } => Some(latency_ms),
            ProbeStatus::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.status, ProbeStatus::Success { .. })
    }
}
