use async_trait::async_trait;
use failsafe_dns_domain::{DomainError, NotificationEvent};

/// Port for delivering one operator notification. Best-effort: a delivery
/// failure never aborts the run that produced the event.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, event: &NotificationEvent) -> Result<(), DomainError>;
}
