use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

const PLAIN_DNS_PORT: u16 = 53;
const DOT_PORT: u16 = 853;

/// One upstream forwarder address, in the notation the downstream resolver
/// consumes: `IP[@PORT]` for plain DNS, `IP@PORT#AUTH_NAME` for
/// DNS-over-TLS with certificate name verification.
///
/// Using `@` as the port separator keeps IPv6 addresses unambiguous, so no
/// bracket syntax is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolverEndpoint {
    Udp {
        addr: SocketAddr,
    },
    Tls {
        addr: SocketAddr,
        auth_name: Arc<str>,
    },
}

impl ResolverEndpoint {
    pub fn socket_addr(&self) -> SocketAddr {
        match self {
            Self::Udp { addr } | Self::Tls { addr, .. } => *addr,
        }
    }

    /// TLS certificate authentication name, if this endpoint uses TLS.
    pub fn auth_name(&self) -> Option<&str> {
        match self {
            Self::Udp { .. } => None,
            Self::Tls { auth_name, .. } => Some(auth_name),
        }
    }

    pub fn is_tls(&self) -> bool {
        matches!(self, Self::Tls { .. })
    }

    /// Operand for an Unbound `forward-addr:` line.
    pub fn forward_addr(&self) -> String {
        match self {
            Self::Udp { addr } => format!("{}@{}", addr.ip(), addr.port()),
            Self::Tls { addr, auth_name } => {
                format!("{}@{}#{}", addr.ip(), addr.port(), auth_name)
            }
        }
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.forward_addr())
    }
}

impl FromStr for ResolverEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty resolver endpoint".to_string());
        }

        let (addr_part, auth_name) = match s.split_once('#') {
            Some((addr, name)) => {
                if name.is_empty() {
                    return Err(format!(
                        "Missing TLS authentication name after '#' in '{}'",
                        s
                    ));
                }
                (addr, Some(name))
            }
            None => (s, None),
        };

        let (ip_str, port) = match addr_part.split_once('@') {
            Some((ip, port_str)) => {
                let port = port_str
                    .parse::<u16>()
                    .map_err(|e| format!("Invalid port in '{}': {}", s, e))?;
                (ip, port)
            }
            None => {
                let default_port = if auth_name.is_some() {
                    DOT_PORT
                } else {
                    PLAIN_DNS_PORT
                };
                (addr_part, default_port)
            }
        };

        let ip = ip_str.parse::<IpAddr>().map_err(|_| {
            format!(
                "Invalid resolver endpoint '{}'. Expected IP[@PORT] or IP@PORT#AUTH_NAME",
                s
            )
        })?;
        let addr = SocketAddr::new(ip, port);

        Ok(match auth_name {
            Some(name) => ResolverEndpoint::Tls {
                addr,
                auth_name: name.into(),
            },
            None => ResolverEndpoint::Udp { addr },
        })
    }
}
