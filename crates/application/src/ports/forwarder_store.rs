use failsafe_dns_domain::{DomainError, ForwardZone};

/// Port for persisting the generated forward-zone file.
///
/// Writes replace the whole file; the artifact is never patched in place.
pub trait ForwarderStore: Send + Sync {
    fn write(&self, zone: &ForwardZone) -> Result<(), DomainError>;
}
