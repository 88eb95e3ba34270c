use crate::ports::ResultWriter;
use nameserver_sort_domain::{DomainError, RankedResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct WriteResultsUseCase {
    writers: Vec<Arc<dyn ResultWriter>>,
}

impl WriteResultsUseCase {
    pub fn new(writers: Vec<Arc<dyn ResultWriter>>) -> Self {
        Self { writers }
    }

    /// Writes every artifact. An empty ranking is refused so no empty files
    /// are produced.
    pub fn execute(&self, ranked: &RankedResult) -> Result<Vec<PathBuf>, DomainError> {
        if ranked.is_empty() {
            return Err(DomainError::EmptyResult);
        }

        let mut written = Vec::with_capacity(self.writers.len());
        for writer in &self.writers {
            let path = writer.write(ranked)?;
            debug!(writer = writer.name(), path = %path.display(), "Artifact written");
            written.push(path);
        }

        info!(artifacts = written.len(), "Results written");
        Ok(written)
    }
}
