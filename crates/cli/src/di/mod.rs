use failsafe_dns_application::ports::{DnsProbe, Notifier, StateStore};
use failsafe_dns_application::{FailoverParams, ProbePrimaryUseCase, RunFailoverUseCase};
use failsafe_dns_domain::Config;
use failsafe_dns_infrastructure::dns::UdpProbe;
use failsafe_dns_infrastructure::notify::{NoopNotifier, NtfyNotifier};
use failsafe_dns_infrastructure::system::{CommandResolverControl, FlockRunLock};
use failsafe_dns_infrastructure::{FileForwarderStore, FileStateStore};
use std::sync::Arc;
use std::time::Duration;

/// Dependency Injection - build adapters and use cases from configuration.
pub struct UseCases {
    pub run_failover: RunFailoverUseCase,
    pub probe_primary: ProbePrimaryUseCase,
    pub state_store: Arc<dyn StateStore>,
    pub params: FailoverParams,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let params = FailoverParams {
            primary: config.primary_endpoint()?,
            probe_domains: config.probe.domains.clone(),
            probe_timeout: Duration::from_millis(config.probe.timeout_ms),
            backups: config.backup_endpoints()?,
            tls_cert_bundle: config.backup.tls_cert_bundle.clone(),
        };

        let probe: Arc<dyn DnsProbe> = Arc::new(UdpProbe::new());
        let state_store: Arc<dyn StateStore> =
            Arc::new(FileStateStore::new(&config.runtime.state_file));
        let forwarder_store = Arc::new(FileForwarderStore::new(&config.forwarder.path));
        let resolver_control = Arc::new(CommandResolverControl::new(
            config.forwarder.reload_command.clone(),
        ));
        let run_lock = Arc::new(FlockRunLock::new(&config.runtime.lock_file));

        let notifier: Arc<dyn Notifier> = if config.notify.enabled {
            Arc::new(NtfyNotifier::new(
                config.notify.endpoint.clone(),
                config.notify.topic.clone(),
                config.notify.token.clone(),
                Duration::from_millis(config.notify.timeout_ms),
            )?)
        } else {
            Arc::new(NoopNotifier::new())
        };

        let run_failover = RunFailoverUseCase::new(
            params.clone(),
            probe.clone(),
            state_store.clone(),
            forwarder_store,
            resolver_control,
            notifier,
            run_lock,
        );

        Ok(Self {
            run_failover,
            probe_primary: ProbePrimaryUseCase::new(probe),
            state_store,
            params,
        })
    }
}
