use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A nameserver address exactly as it appeared in the listing.
///
/// May be an IPv4 literal, an IPv6 literal or a hostname. Duplicates are
/// allowed and probed independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(Arc<str>);

impl Candidate {
    pub fn new(address: impl Into<Arc<str>>) -> Self {
        Self(address.into())
    }

    /// Parses one listing line. Returns `None` for blank lines.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_arc(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Splits a newline-delimited listing into candidates, keeping original order.
///
/// When the listing holds more than `max_servers` entries only the first
/// `max_servers - 1` are kept.
pub fn truncate_candidates(listing: &str, max_servers: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = listing.lines().filter_map(Candidate::from_line).collect();

    if candidates.len() > max_servers {
        candidates.truncate(max_servers.saturating_sub(1));
    }

    candidates
}
