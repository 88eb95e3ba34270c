use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Nameserver source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Probe to {address} failed: {reason}")]
    ProbeFailed { address: String, reason: String },

    #[error("Probe to {address} timed out")]
    ProbeTimeout { address: String },

    #[error("Probe to {address} got {received} of {required} replies")]
    InsufficientReplies {
        address: String,
        received: u32,
        required: u32,
    },

    #[error("Could not resolve address: {0}")]
    AddressResolution(String),

    #[error("No usable results: every candidate failed probing")]
    EmptyResult,

    #[error("Failed to write output {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    /// True for per-candidate failures that the probe engine absorbs.
    pub fn is_probe_failure(&self) -> bool {
        matches!(
            self,
            Self::ProbeFailed { .. }
                | Self::ProbeTimeout { .. }
                | Self::InsufficientReplies { .. }
                | Self::AddressResolution(_)
        )
    }
}
