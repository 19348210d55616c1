use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid resolver endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid probe domain: {0}")]
    InvalidProbeDomain(String),

    #[error("Probe timeout after {timeout_ms}ms against {server}")]
    ProbeTimeout { server: String, timeout_ms: u64 },

    #[error("Probe against {server} failed: {reason}")]
    ProbeFailed { server: String, reason: String },

    #[error("State marker error: {0}")]
    StateMarker(String),

    #[error("Forwarder write error: {0}")]
    ForwarderWrite(String),

    #[error("Resolver reload failed: {0}")]
    ReloadFailed(String),

    #[error("Notification delivery failed: {0}")]
    NotifyFailed(String),

    #[error("Run lock error: {0}")]
    LockError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
