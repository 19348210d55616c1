use crate::ports::{DnsProbe, ForwarderStore, Notifier, ResolverControl, RunLock, StateStore};
use crate::use_cases::ProbePrimaryUseCase;
use failsafe_dns_domain::{
    decide, DomainError, FailoverDecision, ForwardZone, HealthState, NotificationEvent,
    ResolverEndpoint,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What a single controller invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Another invocation holds the run lock; nothing was touched.
    SkippedLockHeld,

    /// Target state matches the persisted one; no effects ran.
    Unchanged { state: HealthState },

    /// Forwarder rewritten, resolver reloaded, marker persisted.
    Switched {
        from: Option<HealthState>,
        to: HealthState,
        notified: bool,
    },
}

/// Deployment-fixed inputs of the controller.
#[derive(Debug, Clone)]
pub struct FailoverParams {
    pub primary: ResolverEndpoint,
    pub probe_domains: Vec<String>,
    pub probe_timeout: Duration,
    pub backups: Vec<ResolverEndpoint>,
    pub tls_cert_bundle: Option<String>,
}

/// Use case: one complete controller run.
///
/// lock -> load marker -> probe -> decide -> apply. The decision stage is
/// the pure [`decide`] function; this type owns the effect ordering. On a
/// switch the marker is persisted only after the resolver confirmed its
/// reload, so a failed reload leaves the previous marker in place and the
/// next scheduled run retries the whole switch.
pub struct RunFailoverUseCase {
    params: FailoverParams,
    probe: ProbePrimaryUseCase,
    state_store: Arc<dyn StateStore>,
    forwarder_store: Arc<dyn ForwarderStore>,
    resolver_control: Arc<dyn ResolverControl>,
    notifier: Arc<dyn Notifier>,
    run_lock: Arc<dyn RunLock>,
}

impl RunFailoverUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        params: FailoverParams,
        probe: Arc<dyn DnsProbe>,
        state_store: Arc<dyn StateStore>,
        forwarder_store: Arc<dyn ForwarderStore>,
        resolver_control: Arc<dyn ResolverControl>,
        notifier: Arc<dyn Notifier>,
        run_lock: Arc<dyn RunLock>,
    ) -> Self {
        Self {
            params,
            probe: ProbePrimaryUseCase::new(probe),
            state_store,
            forwarder_store,
            resolver_control,
            notifier,
            run_lock,
        }
    }

    pub async fn execute(&self) -> Result<RunOutcome, DomainError> {
        let Some(_guard) = self.run_lock.try_acquire()? else {
            info!("Run lock held by another invocation, skipping");
            return Ok(RunOutcome::SkippedLockHeld);
        };

        let prior = self.state_store.load()?;
        let healthy = self
            .probe
            .execute(
                &self.params.primary,
                &self.params.probe_domains,
                self.params.probe_timeout,
            )
            .await;

        let target = if healthy {
            HealthState::Primary
        } else {
            HealthState::Backup
        };

        if decide(prior, healthy) == FailoverDecision::NoChange {
            debug!(state = %target, "Target state unchanged, nothing to do");
            return Ok(RunOutcome::Unchanged { state: target });
        }

        self.switch(prior, target).await
    }

    async fn switch(
        &self,
        from: Option<HealthState>,
        to: HealthState,
    ) -> Result<RunOutcome, DomainError> {
        let zone = match to {
            HealthState::Primary => ForwardZone::primary(self.params.primary.clone()),
            HealthState::Backup => ForwardZone::backup(
                self.params.backups.clone(),
                self.params.tls_cert_bundle.clone(),
            ),
        };

        self.forwarder_store.write(&zone)?;
        self.resolver_control.reload().await?;
        self.state_store.save(to)?;

        info!(from = ?from.map(|s| s.as_str()), to = %to, "Forwarder switched");

        // No transition edge exists on the first run, so no notification.
        let notified = match from {
            None => false,
            Some(_) => {
                let event = match to {
                    HealthState::Backup => NotificationEvent::backup_engaged(
                        &self.params.primary,
                        &self.params.backups,
                    ),
                    HealthState::Primary => {
                        NotificationEvent::primary_restored(&self.params.primary)
                    }
                };
                match self.notifier.send(&event).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "Notification delivery failed");
                        false
                    }
                }
            }
        };

        Ok(RunOutcome::Switched {
            from,
            to,
            notified,
        })
    }
}
