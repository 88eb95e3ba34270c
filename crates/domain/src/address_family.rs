//! Address classification.
//!
//! Decides whether a candidate is an IPv6 literal or something else (IPv4
//! literal or hostname). Everything that is not a well-formed IPv6 literal
//! falls into [`AddressFamily::Ipv4OrHostname`]; classification never fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv6Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFamily {
    Ipv4OrHostname,
    Ipv6,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4OrHostname => "ipv4_or_hostname",
            Self::Ipv6 => "ipv6",
        }
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Self::Ipv6)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed IPv6 literal with its optional zone index (`fe80::1%eth0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Literal<'a> {
    pub addr: Ipv6Addr,
    pub zone: Option<&'a str>,
}

/// Classifies a candidate address.
pub fn classify(address: &str) -> AddressFamily {
    if parse_ipv6_literal(address).is_some() {
        AddressFamily::Ipv6
    } else {
        AddressFamily::Ipv4OrHostname
    }
}

/// Parses an IPv6 literal, accepting surrounding brackets and a zone index.
///
/// Covers full and compressed forms, embedded IPv4 tails (`::ffff:a.b.c.d`)
/// and addresses scoped with `%zone`. A zone must be alphanumeric.
pub fn parse_ipv6_literal(address: &str) -> Option<Ipv6Literal<'_>> {
    let trimmed = address.trim();
    let inner = match trimmed.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']')?,
        None => trimmed,
    };

    let (addr_part, zone) = match inner.split_once('%') {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (inner, None),
    };

    let addr: Ipv6Addr = addr_part.parse().ok()?;

    if let Some(zone) = zone {
        if !is_valid_zone(zone) {
            return None;
        }
    }

    Some(Ipv6Literal { addr, zone })
}

fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty() && zone.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_is_extracted() {
        let literal = parse_ipv6_literal("fe80::1%eth0").unwrap();
        assert_eq!(literal.zone, Some("eth0"));
        assert_eq!(literal.addr, "fe80::1".parse::<Ipv6Addr>().unwrap());
    }

    #[test]
    fn test_zone_on_global_address_accepted() {
        let literal = parse_ipv6_literal("2001:db8::1%eth0").unwrap();
        assert_eq!(literal.zone, Some("eth0"));
    }

    #[test]
    fn test_empty_zone_rejected() {
        assert!(parse_ipv6_literal("fe80::1%").is_none());
    }
}
