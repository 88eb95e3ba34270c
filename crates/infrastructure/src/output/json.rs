use super::write_error;
use nameserver_sort_application::ports::ResultWriter;
use nameserver_sort_domain::{DomainError, RankedResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the ranking verbatim as a JSON array to `<dir>/<stem>.json`.
pub struct JsonResultWriter {
    path: PathBuf,
}

impl JsonResultWriter {
    pub fn new(directory: &Path, stem: &str) -> Self {
        Self {
            path: directory.join(format!("{}.json", stem)),
        }
    }
}

impl ResultWriter for JsonResultWriter {
    fn write(&self, ranked: &RankedResult) -> Result<PathBuf, DomainError> {
        let file = File::create(&self.path).map_err(|e| write_error(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, ranked).map_err(|e| write_error(&self.path, e))?;
        writer.flush().map_err(|e| write_error(&self.path, e))?;
        Ok(self.path.clone())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
