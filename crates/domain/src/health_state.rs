use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which upstream path the forwarder configuration is currently built for.
///
/// Persisted between runs as a one-word marker so a controller invocation
/// can tell whether the probed target differs from what is already applied.
/// There are exactly two states; a run either keeps the current one or
/// flips to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum HealthState {
    Primary,
    Backup,
}

impl HealthState {
    /// Marker-file spelling of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Backup => "backup",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Primary => Self::Backup,
            Self::Backup => Self::Primary,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "primary" => Ok(Self::Primary),
            "backup" => Ok(Self::Backup),
            other => Err(DomainError::StateMarker(format!(
                "Unrecognized state marker '{}'",
                other
            ))),
        }
    }
}
