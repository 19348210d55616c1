#![allow(dead_code)]

use async_trait::async_trait;
use failsafe_dns_application::ports::{
    DnsProbe, ForwarderStore, LockGuard, Notifier, ResolverControl, RunLock, StateStore,
};
use failsafe_dns_domain::{
    DomainError, ForwardZone, HealthState, NotificationEvent, ResolverEndpoint,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockDnsProbe {
    answering_domains: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockDnsProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(domains: Vec<&str>) -> Self {
        let probe = Self::new();
        probe.set_answering(domains);
        probe
    }

    pub fn set_answering(&self, domains: Vec<&str>) {
        let mut set = self.answering_domains.write().unwrap();
        set.clear();
        set.extend(domains.into_iter().map(String::from));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl DnsProbe for MockDnsProbe {
    async fn lookup(
        &self,
        domain: &str,
        server: &ResolverEndpoint,
        _timeout: Duration,
    ) -> Result<(), DomainError> {
        self.calls.write().unwrap().push(domain.to_string());

        if self.answering_domains.read().unwrap().contains(domain) {
            Ok(())
        } else {
            Err(DomainError::ProbeFailed {
                server: server.to_string(),
                reason: "no mock answer".to_string(),
            })
        }
    }
}

#[derive(Clone, Default)]
pub struct MockStateStore {
    state: Arc<RwLock<Option<HealthState>>>,
    save_count: Arc<RwLock<u32>>,
    should_fail_load: Arc<RwLock<bool>>,
    should_fail_save: Arc<RwLock<bool>>,
}

impl MockStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: HealthState) -> Self {
        let store = Self::new();
        *store.state.write().unwrap() = Some(state);
        store
    }

    pub fn state(&self) -> Option<HealthState> {
        *self.state.read().unwrap()
    }

    pub fn save_count(&self) -> u32 {
        *self.save_count.read().unwrap()
    }

    pub fn set_should_fail_save(&self, fail: bool) {
        *self.should_fail_save.write().unwrap() = fail;
    }
}

impl StateStore for MockStateStore {
    fn load(&self) -> Result<Option<HealthState>, DomainError> {
        if *self.should_fail_load.read().unwrap() {
            return Err(DomainError::StateMarker("mock load failed".to_string()));
        }
        Ok(*self.state.read().unwrap())
    }

    fn save(&self, state: HealthState) -> Result<(), DomainError> {
        if *self.should_fail_save.read().unwrap() {
            return Err(DomainError::StateMarker("mock save failed".to_string()));
        }
        *self.state.write().unwrap() = Some(state);
        *self.save_count.write().unwrap() += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockForwarderStore {
    writes: Arc<RwLock<Vec<ForwardZone>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockForwarderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<ForwardZone> {
        self.writes.read().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.read().unwrap().len()
    }

    pub fn last_write(&self) -> Option<ForwardZone> {
        self.writes.read().unwrap().last().cloned()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }
}

impl ForwarderStore for MockForwarderStore {
    fn write(&self, zone: &ForwardZone) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::ForwarderWrite("mock write failed".to_string()));
        }
        self.writes.write().unwrap().push(zone.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockResolverControl {
    reload_count: Arc<RwLock<u32>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockResolverControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload_count(&self) -> u32 {
        *self.reload_count.read().unwrap()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }
}

#[async_trait]
impl ResolverControl for MockResolverControl {
    async fn reload(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::ReloadFailed("mock reload failed".to_string()));
        }
        *self.reload_count.write().unwrap() += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockNotifier {
    events: Arc<RwLock<Vec<NotificationEvent>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.read().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().unwrap().len()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::NotifyFailed("mock delivery failed".to_string()));
        }
        self.events.write().unwrap().push(event.clone());
        Ok(())
    }
}

pub struct MockLockGuard;

impl LockGuard for MockLockGuard {}

#[derive(Clone, Default)]
pub struct MockRunLock {
    held_elsewhere: Arc<Mutex<bool>>,
    acquire_count: Arc<RwLock<u32>>,
}

impl MockRunLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held() -> Self {
        let lock = Self::new();
        *lock.held_elsewhere.lock().unwrap() = true;
        lock
    }

    pub fn acquire_count(&self) -> u32 {
        *self.acquire_count.read().unwrap()
    }
}

impl RunLock for MockRunLock {
    fn try_acquire(&self) -> Result<Option<Box<dyn LockGuard>>, DomainError> {
        *self.acquire_count.write().unwrap() += 1;
        if *self.held_elsewhere.lock().unwrap() {
            Ok(None)
        } else {
            Ok(Some(Box::new(MockLockGuard)))
        }
    }
}
