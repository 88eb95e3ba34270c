use super::write_error;
use nameserver_sort_application::ports::ResultWriter;
use nameserver_sort_domain::{DomainError, RankedResult};
use std::path::{Path, PathBuf};

pub const BIND_OPTIONS_FILE: &str = "named.conf.options";
pub const DEFAULT_FORWARDERS: usize = 4;

const FORWARDER_INDENT: &str = "            ";

/// Renders a BIND `options` block forwarding to the `count` fastest servers.
pub fn render_bind_options(ranked: &RankedResult, count: usize) -> String {
    let forwarders: String = ranked
        .top(count)
        .iter()
        .map(|server| format!("{}{};\n", FORWARDER_INDENT, server.address))
        .collect();

    format!(
        "options {{\n\
         \x20       directory \"/var/cache/bind\";\n\
         \x20       forwarders {{\n\
         {forwarders}\
         \x20       }};\n\
         \x20       dnssec-validation auto;\n\
         \x20       listen-on-v6 {{ any; }};\n\
         }};\n"
    )
}

/// Writes `named.conf.options` into the output directory.
pub struct BindForwardersWriter {
    path: PathBuf,
    forwarders: usize,
}

impl BindForwardersWriter {
    pub fn new(directory: &Path) -> Self {
        Self {
            path: directory.join(BIND_OPTIONS_FILE),
            forwarders: DEFAULT_FORWARDERS,
        }
    }

    pub fn with_forwarders(mut self, forwarders: usize) -> Self {
        self.forwarders = forwarders;
        self
    }
}

impl ResultWriter for BindForwardersWriter {
    fn write(&self, ranked: &RankedResult) -> Result<PathBuf, DomainError> {
        std::fs::write(&self.path, render_bind_options(ranked, self.forwarders))
            .map_err(|e| write_error(&self.path, e))?;
        Ok(self.path.clone())
    }

    fn name(&self) -> &'static str {
        "bind"
    }
}
