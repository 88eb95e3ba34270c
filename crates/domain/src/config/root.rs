use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::probe::{ProbeConfig, ProbeMethod};
use super::source::SourceConfig;

const LOCAL_CONFIG_FILE: &str = "nameserver-sort.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where the candidate listing comes from
    #[serde(default)]
    pub source: SourceConfig,

    /// Probe transport and timeout policy
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Output artifacts
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nameserver-sort.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(code) = overrides.country_code {
            self.source.country_code = code;
        }
        if let Some(max) = overrides.max_servers {
            self.source.max_servers = max;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.probe.timeout_secs = timeout;
        }
        if let Some(replies) = overrides.min_replies {
            self.probe.min_replies = replies;
        }
        if let Some(method) = overrides.method {
            self.probe.method = method;
        }
        if let Some(limit) = overrides.max_in_flight {
            self.probe.max_in_flight = Some(limit);
        }
        if let Some(dir) = overrides.output_dir {
            self.output.directory = dir;
        }
        if let Some(name) = overrides.filename {
            self.output.filename = Some(name);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = self.source.listing_code();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ConfigError::Validation(format!(
                "Country code must be alphabetic, got '{}'",
                self.source.country_code
            )));
        }

        if self.source.max_servers == 0 {
            return Err(ConfigError::Validation(
                "max_servers must be at least 1".to_string(),
            ));
        }

        if self.probe.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Probe timeout cannot be 0".to_string(),
            ));
        }

        if self.probe.min_replies == 0 {
            return Err(ConfigError::Validation(
                "min_replies must be at least 1".to_string(),
            ));
        }

        if self.probe.max_in_flight == Some(0) {
            return Err(ConfigError::Validation(
                "max_in_flight cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn output_stem(&self) -> String {
        self.output.file_stem(&self.source.listing_code())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub country_code: Option<String>,
    pub max_servers: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub min_replies: Option<u32>,
    pub method: Option<ProbeMethod>,
    pub max_in_flight: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub log_level: Option<String>,
}
