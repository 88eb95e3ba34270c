pub mod bind;
pub mod csv;
pub mod json;

pub use bind::{render_bind_options, BindForwardersWriter};
pub use csv::CsvResultWriter;
pub use json::JsonResultWriter;

use nameserver_sort_domain::DomainError;
use std::path::Path;

fn write_error(path: &Path, e: impl std::fmt::Display) -> DomainError {
    DomainError::OutputWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
