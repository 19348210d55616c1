mod probe_primary;
mod run_failover;

pub use probe_primary::ProbePrimaryUseCase;
pub use run_failover::{FailoverParams, RunFailoverUseCase, RunOutcome};
