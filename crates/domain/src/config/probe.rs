use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Address of the filtering resolver, `IP[@PORT]` (port defaults to 53).
    #[serde(default = "default_primary_address")]
    pub primary_address: String,

    /// Ordered health-check targets. The first successful resolution
    /// declares the primary healthy.
    #[serde(default = "default_probe_domains")]
    pub domains: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            primary_address: default_primary_address(),
            domains: default_probe_domains(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_primary_address() -> String {
    "192.168.1.5".to_string()
}

fn default_probe_domains() -> Vec<String> {
    vec![
        "cloudflare.com".to_string(),
        "google.com".to_string(),
        "wikipedia.org".to_string(),
    ]
}

fn default_timeout_ms() -> u64 {
    900
}
