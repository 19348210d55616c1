use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    /// Upstreams used while the primary is down, `IP@PORT#AUTH_NAME`
    /// (DNS-over-TLS), in preference order.
    #[serde(default = "default_backup_resolvers")]
    pub resolvers: Vec<String>,

    /// Trust-anchor bundle for upstream certificate validation, if the
    /// resolver build does not ship one.
    #[serde(default)]
    pub tls_cert_bundle: Option<String>,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            resolvers: default_backup_resolvers(),
            tls_cert_bundle: None,
        }
    }
}

fn default_backup_resolvers() -> Vec<String> {
    vec![
        "1.1.1.1@853#cloudflare-dns.com".to_string(),
        "9.9.9.9@853#dns.quad9.net".to_string(),
    ]
}
