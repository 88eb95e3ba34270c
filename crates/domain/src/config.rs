pub mod errors;
pub mod logging;
pub mod output;
pub mod probe;
pub mod root;
pub mod source;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use probe::{ProbeConfig, ProbeMethod};
pub use root::{CliOverrides, Config};
pub use source::SourceConfig;
