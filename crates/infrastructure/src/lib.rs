//! Nameserver Sort Infrastructure Layer
//!
//! * [`source`]: fetches candidate listings over HTTP.
//! * [`probe`]: DNS and ICMP probe transports.
//! * [`output`]: JSON, CSV and BIND artifact writers.
pub mod output;
pub mod probe;
pub mod source;
