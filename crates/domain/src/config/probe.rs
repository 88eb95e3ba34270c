use crate::transport_profile::ProbeSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    /// Timed DNS queries over UDP.
    #[default]
    Dns,

    /// ICMP echo through the system `ping` binary.
    Ping,
}

impl ProbeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "dns",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dns" => Ok(Self::Dns),
            "ping" | "icmp" => Ok(Self::Ping),
            other => Err(format!("unknown probe method '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub method: ProbeMethod,

    /// Per-probe timeout for IPv4 and hostname candidates.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Replies required before an IPv4 or hostname probe counts as a success.
    #[serde(default = "default_min_replies")]
    pub min_replies: u32,

    /// Name asked for by the DNS probe.
    #[serde(default = "default_query_domain")]
    pub query_domain: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on probes in flight. Unset means one task per candidate.
    #[serde(default)]
    pub max_in_flight: Option<usize>,
}

impl ProbeConfig {
    pub fn settings(&self) -> ProbeSettings {
        ProbeSettings::new(self.timeout_secs, self.min_replies)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            method: ProbeMethod::default(),
            timeout_secs: default_timeout_secs(),
            min_replies: default_min_replies(),
            query_domain: default_query_domain(),
            port: default_port(),
            max_in_flight: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    1
}

fn default_min_replies() -> u32 {
    10
}

fn default_query_domain() -> String {
    "google.com".to_string()
}

fn default_port() -> u16 {
    53
}
