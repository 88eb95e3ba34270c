//! Nameserver Sort Domain Layer
pub mod address_family;
pub mod candidate;
pub mod config;
pub mod errors;
pub mod probe_outcome;
pub mod ranked_result;
pub mod transport_profile;

pub use address_family::{classify, parse_ipv6_literal, AddressFamily, Ipv6Literal};
pub use candidate::{truncate_candidates, Candidate};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use probe_outcome::{ProbeOutcome, ProbeStatus};
pub use ranked_result::{RankedResult, RankedServer};
pub use transport_profile::{ProbeSettings, TransportProfile};
