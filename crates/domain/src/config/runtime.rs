use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Marker file recording the last applied state.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Lock file guarding against overlapping invocations.
    #[serde(default = "default_lock_file")]
    pub lock_file: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            lock_file: default_lock_file(),
        }
    }
}

fn default_state_file() -> String {
    "/var/lib/failsafe-dns/state".to_string()
}

fn default_lock_file() -> String {
    "/run/failsafe-dns.lock".to_string()
}
