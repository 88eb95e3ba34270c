use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One reachable nameserver and its average round-trip time in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedServer {
    pub address: Arc<str>,
    pub average: f64,
}

/// Reachable nameservers ordered by ascending average latency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<RankedServer>);

impl RankedResult {
    /// Callers must pass entries already sorted ascending by `average`.
    pub fn from_sorted(servers: Vec<RankedServer>) -> Self {
        debug_assert!(servers.windows(2).all(|w| w[0].average <= w[1].average));
        Self(servers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fastest(&self) -> Option<&RankedServer> {
        self.0.first()
    }

    pub fn top(&self, n: usize) -> &[RankedServer] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedServer> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RankedServer] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedServer;
    type IntoIter = std::slice::Iter<'a, RankedServer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
