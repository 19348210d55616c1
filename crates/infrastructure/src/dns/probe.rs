//! UDP health probe.
//!
//! One query, one response, bounded by the per-attempt timeout. The probe
//! deliberately keeps no connection or socket state between attempts; a
//! degraded resolver should see the cheapest possible traffic.

use super::message;
use async_trait::async_trait;
use failsafe_dns_application::ports::DnsProbe;
use failsafe_dns_domain::{DomainError, ResolverEndpoint};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Probes a resolver with single-question A queries over UDP.
#[derive(Default)]
pub struct UdpProbe;

impl UdpProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsProbe for UdpProbe {
    async fn lookup(
        &self,
        domain: &str,
        server: &ResolverEndpoint,
        timeout: Duration,
    ) -> Result<(), DomainError> {
        let server_addr = server.socket_addr();
        let timeout_ms = timeout.as_millis() as u64;
        let (id, query_bytes) = message::build_probe_query(domain)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::ProbeFailed {
                server: server.to_string(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        tokio::time::timeout(timeout, socket.send_to(&query_bytes, server_addr))
            .await
            .map_err(|_| DomainError::ProbeTimeout {
                server: server.to_string(),
                timeout_ms,
            })?
            .map_err(|e| DomainError::ProbeFailed {
                server: server.to_string(),
                reason: format!("send error: {}", e),
            })?;

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::ProbeTimeout {
                    server: server.to_string(),
                    timeout_ms,
                })?
                .map_err(|e| DomainError::ProbeFailed {
                    server: server.to_string(),
                    reason: format!("receive error: {}", e),
                })?;

        if from_addr.ip() != server_addr.ip() {
            warn!(
                expected = %server_addr,
                received_from = %from_addr,
                "Probe response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        message::check_probe_response(&recv_buf, id).map_err(|reason| {
            DomainError::ProbeFailed {
                server: server.to_string(),
                reason,
            }
        })?;

        debug!(domain = %domain, server = %server, "Probe resolved");
        Ok(())
    }
}
