use nameserver_sort_domain::{DomainError, RankedResult};
use std::path::PathBuf;

/// Persists a ranked result as one artifact and returns where it went.
pub trait ResultWriter: Send + Sync {
    fn write(&self, ranked: &RankedResult) -> Result<PathBuf, DomainError>;

    fn name(&self) -> &'static str;
}
