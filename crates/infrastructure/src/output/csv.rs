use super::write_error;
use nameserver_sort_application::ports::ResultWriter;
use nameserver_sort_domain::{DomainError, RankedResult};
use std::path::{Path, PathBuf};

/// Writes one row per ranked server to `<dir>/<stem>.csv` under an
/// `address,average` header.
pub struct CsvResultWriter {
    path: PathBuf,
}

impl CsvResultWriter {
    pub fn new(directory: &Path, stem: &str) -> Self {
        Self {
            path: directory.join(format!("{}.csv", stem)),
        }
    }
}

impl ResultWriter for CsvResultWriter {
    fn write(&self, ranked: &RankedResult) -> Result<PathBuf, DomainError> {
        let mut writer = ::csv::Writer::from_path(&self.path).map_err(|e| write_error(&self.path, e))?;

        for server in ranked {
            writer
                .serialize(server)
                .map_err(|e| write_error(&self.path, e))?;
        }

        writer.flush().map_err(|e| write_error(&self.path, e))?;
        Ok(self.path.clone())
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
