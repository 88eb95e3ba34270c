//! Nameserver Sort Application Layer
//!
//! Ports describe the outside world (listing source, probe transport, output
//! writers); use cases drive the probe-and-rank run through them.
pub mod ports;
pub mod use_cases;
