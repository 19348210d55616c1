use crate::resolver_endpoint::ResolverEndpoint;
use std::fmt::Write;

/// The generated forwarder configuration artifact.
///
/// Regenerated wholesale on every switch and written over the previous
/// file; the downstream resolver treats it as read-only input picked up on
/// reload. Never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardZone {
    upstreams: Vec<ResolverEndpoint>,
    tls_upstream: bool,
    tls_cert_bundle: Option<String>,
}

impl ForwardZone {
    /// Exclusive-primary zone: every query goes to the filtering resolver
    /// over plain DNS, preserving its blocking behavior.
    pub fn primary(endpoint: ResolverEndpoint) -> Self {
        Self {
            upstreams: vec![endpoint],
            tls_upstream: false,
            tls_cert_bundle: None,
        }
    }

    /// Backup zone: all configured backup resolvers over TLS, with an
    /// optional trust-anchor bundle for certificate validation.
    pub fn backup(endpoints: Vec<ResolverEndpoint>, tls_cert_bundle: Option<String>) -> Self {
        Self {
            upstreams: endpoints,
            tls_upstream: true,
            tls_cert_bundle,
        }
    }

    pub fn upstreams(&self) -> &[ResolverEndpoint] {
        &self.upstreams
    }

    pub fn is_tls(&self) -> bool {
        self.tls_upstream
    }

    /// Render the complete Unbound snippet this zone stands for.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("# Generated by failsafe-dns. Manual edits are overwritten.\n");

        if let Some(bundle) = &self.tls_cert_bundle {
            out.push_str("server:\n");
            let _ = writeln!(out, "    tls-cert-bundle: \"{}\"", bundle);
            out.push('\n');
        }

        out.push_str("forward-zone:\n");
        out.push_str("    name: \".\"\n");
        if self.tls_upstream {
            out.push_str("    forward-tls-upstream: yes\n");
        }
        for upstream in &self.upstreams {
            let _ = writeln!(out, "    forward-addr: {}", upstream.forward_addr());
        }
        out
    }
}
