use async_trait::async_trait;
use failsafe_dns_application::ports::ResolverControl;
use failsafe_dns_domain::DomainError;
use tokio::process::Command;
use tracing::{debug, info};

/// Reloads the downstream resolver by running a configured command,
/// e.g. `unbound-control reload` or `service unbound restart`.
pub struct CommandResolverControl {
    command: Vec<String>,
}

impl CommandResolverControl {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ResolverControl for CommandResolverControl {
    async fn reload(&self) -> Result<(), DomainError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| DomainError::ReloadFailed("empty reload command".to_string()))?;

        debug!(command = ?self.command, "Running resolver reload");

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| DomainError::ReloadFailed(format!("failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::ReloadFailed(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        info!(command = %program, "Resolver reloaded");
        Ok(())
    }
}
