use failsafe_dns_domain::DomainError;

/// Held for the duration of one controller run. Dropping the guard
/// releases the lock, on every exit path.
pub trait LockGuard: Send {}

/// Port for the exclusive, non-blocking run lock.
pub trait RunLock: Send + Sync {
    /// `None` when another invocation already holds the lock. That is the
    /// expected outcome under frequent scheduling, not an error.
    fn try_acquire(&self) -> Result<Option<Box<dyn LockGuard>>, DomainError>;
}
