use crate::atomic_file;
use failsafe_dns_application::ports::ForwarderStore;
use failsafe_dns_domain::{DomainError, ForwardZone};
use std::path::PathBuf;
use tracing::info;

/// Writes the rendered forward-zone file, replacing it wholesale.
pub struct FileForwarderStore {
    path: PathBuf,
}

impl FileForwarderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ForwarderStore for FileForwarderStore {
    fn write(&self, zone: &ForwardZone) -> Result<(), DomainError> {
        atomic_file::replace_file(&self.path, &zone.render()).map_err(|e| {
            DomainError::ForwarderWrite(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        info!(
            path = %self.path.display(),
            upstreams = zone.upstreams().len(),
            tls = zone.is_tls(),
            "Forwarder configuration rewritten"
        );
        Ok(())
    }
}
