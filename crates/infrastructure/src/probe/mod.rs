pub mod dns_echo;
pub mod message_builder;
pub mod ping;
pub mod target;

pub use dns_echo::DnsEchoProbe;
pub use message_builder::MessageBuilder;
pub use ping::{parse_ping_summary, wait_arg, PingSummary, SystemPingProbe};
pub use target::resolve_target;

use nameserver_sort_application::ports::ProbeTransport;
use nameserver_sort_domain::config::{ProbeConfig, ProbeMethod};
use std::sync::Arc;
use std::time::Duration;

/// Timeout applied when a profile carries no override (IPv6 candidates).
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Replies required when a profile carries no override (IPv6 candidates).
pub const DEFAULT_MIN_REPLIES: u32 = 1;

pub fn create_transport(config: &ProbeConfig) -> Arc<dyn ProbeTransport> {
    match config.method {
        ProbeMethod::Dns => Arc::new(DnsEchoProbe::new(&config.query_domain, config.port)),
        ProbeMethod::Ping => Arc::new(SystemPingProbe::new()),
    }
}
