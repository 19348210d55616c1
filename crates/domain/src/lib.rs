//! Failsafe DNS Domain Layer
pub mod config;
pub mod errors;
pub mod forward_zone;
pub mod health_state;
pub mod notification;
pub mod resolver_endpoint;
pub mod transition;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use forward_zone::ForwardZone;
pub use health_state::HealthState;
pub use notification::{NotificationEvent, NotifyPriority};
pub use resolver_endpoint::ResolverEndpoint;
pub use transition::{decide, FailoverDecision};
