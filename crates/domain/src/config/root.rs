use serde::{Deserialize, Serialize};

use super::backup::BackupConfig;
use super::errors::ConfigError;
use super::forwarder::ForwarderFileConfig;
use super::logging::LoggingConfig;
use super::notify::NotifyConfig;
use super::probe::ProbeConfig;
use super::runtime::RuntimeConfig;
use crate::resolver_endpoint::ResolverEndpoint;

/// Main configuration structure for failsafe-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Health probing of the primary resolver
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Upstreams used while the primary is down
    #[serde(default)]
    pub backup: BackupConfig,

    /// Generated forwarder file and the reload hook
    #[serde(default)]
    pub forwarder: ForwarderFileConfig,

    /// Operator notifications
    #[serde(default)]
    pub notify: NotifyConfig,

    /// State marker and run lock locations
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. failsafe-dns.toml in current directory
    /// 3. /etc/failsafe-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("failsafe-dns.toml").exists() {
            Self::from_file("failsafe-dns.toml")?
        } else if std::path::Path::new("/etc/failsafe-dns/config.toml").exists() {
            Self::from_file("/etc/failsafe-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(path) = overrides.state_file {
            self.runtime.state_file = path;
        }
        if let Some(path) = overrides.forwarder_path {
            self.forwarder.path = path;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.domains.is_empty() {
            return Err(ConfigError::Validation(
                "No probe domains configured".to_string(),
            ));
        }

        if self.probe.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Probe timeout cannot be 0".to_string(),
            ));
        }

        let primary = self.primary_endpoint()?;
        if primary.is_tls() {
            return Err(ConfigError::Validation(format!(
                "Primary resolver '{}' is probed over plain DNS; drop the TLS authentication name",
                self.probe.primary_address
            )));
        }

        if self.backup.resolvers.is_empty() {
            return Err(ConfigError::Validation(
                "No backup resolvers configured".to_string(),
            ));
        }

        for endpoint in self.backup_endpoints()? {
            if !endpoint.is_tls() {
                return Err(ConfigError::Validation(format!(
                    "Backup resolver '{}' must carry a TLS authentication name (IP@PORT#NAME)",
                    endpoint
                )));
            }
        }

        if self.forwarder.reload_command.is_empty() {
            return Err(ConfigError::Validation(
                "Reload command cannot be empty".to_string(),
            ));
        }

        if self.notify.enabled {
            if self.notify.endpoint.is_empty() {
                return Err(ConfigError::Validation(
                    "Notifications enabled but no endpoint configured".to_string(),
                ));
            }
            if self.notify.topic.is_empty() {
                return Err(ConfigError::Validation(
                    "Notifications enabled but no topic configured".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Parsed primary endpoint.
    pub fn primary_endpoint(&self) -> Result<ResolverEndpoint, ConfigError> {
        self.probe
            .primary_address
            .parse()
            .map_err(ConfigError::Validation)
    }

    /// Parsed backup endpoints, in configured order.
    pub fn backup_endpoints(&self) -> Result<Vec<ResolverEndpoint>, ConfigError> {
        self.backup
            .resolvers
            .iter()
            .map(|s| s.parse().map_err(ConfigError::Validation))
            .collect()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub state_file: Option<String>,
    pub forwarder_path: Option<String>,
}
