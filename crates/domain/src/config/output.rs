use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Base name for the JSON and CSV files. Defaults to `results-<country>`.
    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default = "default_true")]
    pub json: bool,

    #[serde(default = "default_true")]
    pub csv: bool,

    /// Write a BIND `named.conf.options` with the fastest forwarders.
    #[serde(default = "default_true")]
    pub bind: bool,
}

impl OutputConfig {
    /// Resolves the artifact base name, dropping any `.json`/`.csv` extension.
    pub fn file_stem(&self, listing_code: &str) -> String {
        let name = self
            .filename
            .clone()
            .unwrap_or_else(|| format!("results-{}", listing_code));
        name.replacen(".json", "", 1).replacen(".csv", "", 1)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filename: None,
            json: true,
            csv: true,
            bind: true,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./")
}

fn default_true() -> bool {
    true
}
