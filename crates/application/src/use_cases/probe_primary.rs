use crate::ports::DnsProbe;
use failsafe_dns_domain::ResolverEndpoint;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Use case: decide whether the primary resolver is healthy.
///
/// Probes run sequentially in configured order and the first answered probe
/// short-circuits to healthy — an OR across probes, not a majority vote.
/// All failures mean unhealthy, which is the expected failover signal
/// rather than an error.
pub struct ProbePrimaryUseCase {
    probe: Arc<dyn DnsProbe>,
}

impl ProbePrimaryUseCase {
    pub fn new(probe: Arc<dyn DnsProbe>) -> Self {
        Self { probe }
    }

    pub async fn execute(
        &self,
        primary: &ResolverEndpoint,
        domains: &[String],
        timeout: Duration,
    ) -> bool {
        for (position, domain) in domains.iter().enumerate() {
            match self.probe.lookup(domain, primary, timeout).await {
                Ok(()) => {
                    debug!(domain = %domain, position, "Probe answered, primary healthy");
                    return true;
                }
                Err(e) => {
                    debug!(domain = %domain, position, error = %e, "Probe failed, trying next");
                }
            }
        }

        warn!(server = %primary, probes = domains.len(), "All probes failed, primary unhealthy");
        false
    }
}
