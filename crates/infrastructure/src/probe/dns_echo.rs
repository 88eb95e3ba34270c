//! DNS echo probe over UDP.
//!
//! Sends `min_replies` sequential queries to the nameserver and times each
//! round trip. The whole exchange, hostname resolution included, runs against
//! one deadline.

use super::message_builder::MessageBuilder;
use super::target::resolve_target;
use super::{DEFAULT_MIN_REPLIES, DEFAULT_PROBE_TIMEOUT};
use async_trait::async_trait;
use nameserver_sort_application::ports::{ProbeMeasurement, ProbeTransport};
use nameserver_sort_domain::{Candidate, DomainError, TransportProfile};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant as Deadline};
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct DnsEchoProbe {
    query_domain: Arc<str>,
    port: u16,
}

impl DnsEchoProbe {
    pub fn new(query_domain: &str, port: u16) -> Self {
        Self {
            query_domain: Arc::from(query_domain),
            port,
        }
    }

    async fn exchange(
        &self,
        socket: &UdpSocket,
        address: &Candidate,
    ) -> Result<Duration, DomainError> {
        let (id, query) = MessageBuilder::build_probe_query(&self.query_domain)?;
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let start = Instant::now();
        socket
            .send(&query)
            .await
            .map_err(|e| failed(address, format!("send: {}", e)))?;

        loop {
            let len = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| failed(address, format!("recv: {}", e)))?;

            if MessageBuilder::is_reply_to(&recv_buf[..len], id) {
                return Ok(start.elapsed());
            }
            debug!(address = %address, bytes = len, "Ignoring unmatched datagram");
        }
    }

    async fn connect(&self, target: SocketAddr, address: &Candidate) -> Result<UdpSocket, DomainError> {
        let bind_addr: SocketAddr = if target.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| failed(address, format!("bind: {}", e)))?;
        socket
            .connect(target)
            .await
            .map_err(|e| failed(address, format!("connect: {}", e)))?;
        Ok(socket)
    }
}

#[async_trait]
impl ProbeTransport for DnsEchoProbe {
    async fn probe(
        &self,
        address: &Candidate,
        profile: &TransportProfile,
    ) -> Result<ProbeMeasurement, DomainError> {
        let timeout = profile.timeout().unwrap_or(DEFAULT_PROBE_TIMEOUT);
        let required = profile.min_replies().unwrap_or(DEFAULT_MIN_REPLIES).max(1);
        let deadline = Deadline::now() + timeout;

        let target = timeout_at(deadline, resolve_target(address, self.port))
            .await
            .map_err(|_| DomainError::ProbeTimeout {
                address: address.to_string(),
            })??;
        let socket = self.connect(target, address).await?;

        let mut total = Duration::ZERO;
        let mut received = 0u32;

        while received < required {
            match timeout_at(deadline, self.exchange(&socket, address)).await {
                Ok(Ok(rtt)) => {
                    total += rtt;
                    received += 1;
                }
                Ok(Err(e)) => return Err(e),
                Err(_) if received == 0 => {
                    return Err(DomainError::ProbeTimeout {
                        address: address.to_string(),
                    })
                }
                Err(_) => {
                    return Err(DomainError::InsufficientReplies {
                        address: address.to_string(),
                        received,
                        required,
                    })
                }
            }
        }

        let average_latency_ms = total.as_secs_f64() * 1000.0 / f64::from(received);
        debug!(
            address = %address,
            target = %target,
            replies = received,
            average_latency_ms,
            "DNS echo complete"
        );

        Ok(ProbeMeasurement {
            average_latency_ms,
            replies: received,
        })
    }

    fn name(&self) -> &'static str {
        "dns"
    }
}

fn failed(address: &Candidate, reason: String) -> DomainError {
    DomainError::ProbeFailed {
        address: address.to_string(),
        reason,
    }
}
