use async_trait::async_trait;
use failsafe_dns_domain::{DomainError, ResolverEndpoint};
use std::time::Duration;

/// Port for resolving one probe domain against a specific server.
#[async_trait]
pub trait DnsProbe: Send + Sync {
    /// `Ok(())` when the server returned a usable answer within the timeout.
    /// Any error counts as a failed probe; the caller does not distinguish.
    async fn lookup(
        &self,
        domain: &str,
        server: &ResolverEndpoint,
        timeout: Duration,
    ) -> Result<(), DomainError>;
}
