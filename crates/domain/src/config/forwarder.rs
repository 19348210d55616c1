use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForwarderFileConfig {
    /// Where the generated forward-zone file is written.
    #[serde(default = "default_forwarder_path")]
    pub path: String,

    /// Command run after a rewrite so the resolver picks the file up.
    #[serde(default = "default_reload_command")]
    pub reload_command: Vec<String>,
}

impl Default for ForwarderFileConfig {
    fn default() -> Self {
        Self {
            path: default_forwarder_path(),
            reload_command: default_reload_command(),
        }
    }
}

fn default_forwarder_path() -> String {
    "/etc/unbound/forward.conf".to_string()
}

fn default_reload_command() -> Vec<String> {
    vec!["unbound-control".to_string(), "reload".to_string()]
}
