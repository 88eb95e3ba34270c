use crate::address_family::{classify, AddressFamily};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Caller-supplied probe policy for IPv4 and hostname candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSettings {
    pub timeout_secs: u64,
    pub min_replies: u32,
}

impl ProbeSettings {
    pub fn new(timeout_secs: u64, min_replies: u32) -> Self {
        Self {
            timeout_secs,
            min_replies,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 1,
            min_replies: 10,
        }
    }
}

/// Probe parameters selected for one candidate.
///
/// IPv6 literals carry no overrides: the transport applies its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportProfile {
    Ipv4OrHostname { timeout: Duration, min_replies: u32 },
    Ipv6,
}

impl TransportProfile {
    pub fn for_address(address: &str, settings: &ProbeSettings) -> Self {
        match classify(address) {
            AddressFamily::Ipv6 => Self::Ipv6,
            AddressFamily::Ipv4OrHostname => Self::Ipv4OrHostname {
                timeout: settings.timeout(),
                min_replies: settings.min_replies,
            },
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Self::Ipv4OrHostname { .. } => AddressFamily::Ipv4OrHostname,
            Self::Ipv6 => AddressFamily::Ipv6,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Ipv4OrHostname { timeout, .. } => Some(*timeout),
            Self::Ipv6 => None,
        }
    }

    pub fn min_replies(&self) -> Option<u32> {
        match self {
            Self::Ipv4OrHostname { min_replies, .. } => Some(*min_replies),
            Self::Ipv6 => None,
        }
    }
}
