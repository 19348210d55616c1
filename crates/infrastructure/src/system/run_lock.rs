use failsafe_dns_application::ports::{LockGuard, RunLock};
use failsafe_dns_domain::DomainError;
use std::fs::{File, OpenOptions};
use std::os::fd::AsRawFd;
use std::path::PathBuf;
use tracing::debug;

/// Exclusive, non-blocking advisory lock on a lock file.
///
/// The guard owns the descriptor, so the kernel drops the lock when the
/// process exits by any route, crashes included.
pub struct FlockRunLock {
    path: PathBuf,
}

impl FlockRunLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

struct FlockGuard {
    _file: File,
}

impl LockGuard for FlockGuard {}

impl RunLock for FlockRunLock {
    fn try_acquire(&self) -> Result<Option<Box<dyn LockGuard>>, DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::LockError(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| {
                DomainError::LockError(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc == 0 {
            debug!(path = %self.path.display(), "Run lock acquired");
            return Ok(Some(Box::new(FlockGuard { _file: file })));
        }

        let err = std::io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EWOULDBLOCK) {
            return Ok(None);
        }

        Err(DomainError::LockError(format!(
            "flock on {} failed: {}",
            self.path.display(),
            err
        )))
    }
}
