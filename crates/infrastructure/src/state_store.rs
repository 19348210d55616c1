use crate::atomic_file;
use failsafe_dns_application::ports::StateStore;
use failsafe_dns_domain::{DomainError, HealthState};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Marker file holding the last applied state as a single word.
///
/// An absent file means first run. An unreadable marker is treated the
/// same way: the controller re-applies whatever the probe decides and
/// rewrites the marker, instead of wedging on a corrupt file.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<HealthState>, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.parse() {
                Ok(state) => Ok(Some(state)),
                Err(_) => {
                    warn!(
                        path = %self.path.display(),
                        "Unreadable state marker, treating as first run"
                    );
                    Ok(None)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::StateMarker(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, state: HealthState) -> Result<(), DomainError> {
        atomic_file::replace_file(&self.path, state.as_str()).map_err(|e| {
            DomainError::StateMarker(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(state = %state, path = %self.path.display(), "State marker persisted");
        Ok(())
    }
}
