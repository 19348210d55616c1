#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers probe queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// NOERROR with one A record.
    Answer,
    /// SERVFAIL, no answers.
    ServFail,
    /// NOERROR with an empty answer section.
    Empty,
    /// Never responds; the probe times out.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if behavior == MockBehavior::Silent {
                                continue;
                            }
                            let response = build_response(&buf[..len], behavior);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(query: &[u8], behavior: MockBehavior) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);

    // ID echoed from the query
    response.extend_from_slice(&query[0..2]);

    // QR + RD, then RA plus the rcode
    response.push(0x81);
    response.push(match behavior {
        MockBehavior::ServFail => 0x82,
        _ => 0x80,
    });

    // QDCOUNT echoed
    response.extend_from_slice(&query[4..6]);

    // ANCOUNT
    let answers: u16 = if behavior == MockBehavior::Answer { 1 } else { 0 };
    response.extend_from_slice(&answers.to_be_bytes());

    // NSCOUNT, ARCOUNT
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    // Question section echoed
    if query.len() > 12 {
        response.extend_from_slice(&query[12..]);
    }

    if behavior == MockBehavior::Answer {
        response.extend_from_slice(&[
            0xc0, 0x0c, // name pointer to the question
            0x00, 0x01, // type A
            0x00, 0x01, // class IN
            0x00, 0x00, 0x00, 0x3c, // TTL 60
            0x00, 0x04, // RDLENGTH
            192, 0, 2, 53, // RDATA
        ]);
    }

    response
}
