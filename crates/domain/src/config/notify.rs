use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    #[serde(default = "default_false")]
    pub enabled: bool,

    /// Base URL of the ntfy-compatible endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub topic: String,

    /// Bearer token, if the endpoint requires authentication.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_notify_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            topic: String::new(),
            token: None,
            timeout_ms: default_notify_timeout_ms(),
        }
    }
}

fn default_false() -> bool {
    false
}

fn default_endpoint() -> String {
    "https://ntfy.sh".to_string()
}

fn default_notify_timeout_ms() -> u64 {
    5000
}
