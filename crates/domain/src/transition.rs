use crate::health_state::HealthState;

/// Outcome of comparing the probed target state against the persisted
/// prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailoverDecision {
    NoChange,
    SwitchToPrimary,
    SwitchToBackup,
}

impl FailoverDecision {
    /// The state a switch moves to, `None` for `NoChange`.
    pub fn target(&self) -> Option<HealthState> {
        match self {
            Self::NoChange => None,
            Self::SwitchToPrimary => Some(HealthState::Primary),
            Self::SwitchToBackup => Some(HealthState::Backup),
        }
    }
}

/// Decide the transition for one controller run.
///
/// A missing prior state (first run, or a wiped marker) always yields a
/// switch: the forwarder file cannot be assumed to match either path until
/// a marker has been persisted alongside it.
pub fn decide(prior: Option<HealthState>, primary_healthy: bool) -> FailoverDecision {
    let target = if primary_healthy {
        HealthState::Primary
    } else {
        HealthState::Backup
    };

    match prior {
        Some(state) if state == target => FailoverDecision::NoChange,
        _ => match target {
            HealthState::Primary => FailoverDecision::SwitchToPrimary,
            HealthState::Backup => FailoverDecision::SwitchToBackup,
        },
    }
}
