use nameserver_sort_domain::{parse_ipv6_literal, Candidate, DomainError};
use std::net::{IpAddr, SocketAddr, SocketAddrV6};
use tokio::net::lookup_host;
use tracing::debug;

/// Turns a candidate into a socket address.
///
/// IP literals are used as-is; IPv6 zone indexes must be numeric. Anything
/// else is resolved as a hostname through the system resolver.
pub async fn resolve_target(address: &Candidate, port: u16) -> Result<SocketAddr, DomainError> {
    let raw = address.as_str();

    if let Some(literal) = parse_ipv6_literal(raw) {
        let scope_id = match literal.zone {
            Some(zone) => zone.parse::<u32>().map_err(|_| {
                DomainError::AddressResolution(format!(
                    "{}: only numeric zone indexes are supported",
                    raw
                ))
            })?,
            None => 0,
        };
        return Ok(SocketAddr::V6(SocketAddrV6::new(
            literal.addr,
            port,
            0,
            scope_id,
        )));
    }

    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let resolved = lookup_host((raw, port))
        .await
        .map_err(|e| DomainError::AddressResolution(format!("{}: {}", raw, e)))?
        .next()
        .ok_or_else(|| DomainError::AddressResolution(format!("{}: no addresses", raw)))?;

    debug!(hostname = %raw, resolved = %resolved, "Hostname resolved");
    Ok(resolved)
}
