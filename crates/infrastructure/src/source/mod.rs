pub mod public_dns;

pub use public_dns::PublicDnsInfoSource;
