mod dns_probe;
mod forwarder_store;
mod notifier;
mod resolver_control;
mod run_lock;
mod state_store;

pub use dns_probe::DnsProbe;
pub use forwarder_store::ForwarderStore;
pub use notifier::Notifier;
pub use resolver_control::ResolverControl;
pub use run_lock::{LockGuard, RunLock};
pub use state_store::StateStore;

// Re-export for convenience
pub use failsafe_dns_domain::HealthState;
