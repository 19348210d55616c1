use async_trait::async_trait;
use failsafe_dns_domain::DomainError;

/// Port for telling the downstream resolver to pick up a rewritten file.
#[async_trait]
pub trait ResolverControl: Send + Sync {
    async fn reload(&self) -> Result<(), DomainError>;
}
