use failsafe_dns_domain::{DomainError, HealthState};

/// Port for the persisted last-applied-state marker.
pub trait StateStore: Send + Sync {
    /// `None` when no marker has been persisted yet (first run).
    fn load(&self) -> Result<Option<HealthState>, DomainError>;

    fn save(&self, state: HealthState) -> Result<(), DomainError>;
}
