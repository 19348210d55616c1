mod backup;
mod errors;
mod forwarder;
mod logging;
mod notify;
mod probe;
mod root;
mod runtime;

pub use backup::BackupConfig;
pub use errors::ConfigError;
pub use forwarder::ForwarderFileConfig;
pub use logging::LoggingConfig;
pub use notify::NotifyConfig;
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
pub use runtime::RuntimeConfig;
