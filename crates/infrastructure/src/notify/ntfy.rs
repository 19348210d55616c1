use async_trait::async_trait;
use failsafe_dns_application::ports::Notifier;
use failsafe_dns_domain::{DomainError, NotificationEvent};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct PublishBody<'a> {
    topic: &'a str,
    title: &'a str,
    message: &'a str,
    priority: u8,
    tags: &'a [String],
}

/// Publishes events to an ntfy-compatible endpoint as a JSON POST against
/// the endpoint root, with optional bearer-token authentication.
pub struct NtfyNotifier {
    client: reqwest::Client,
    endpoint: String,
    topic: String,
    token: Option<String>,
}

impl NtfyNotifier {
    pub fn new(
        endpoint: String,
        topic: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::NotifyFailed(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint,
            topic,
            token,
        })
    }
}

#[async_trait]
impl Notifier for NtfyNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), DomainError> {
        let body = PublishBody {
            topic: &self.topic,
            title: &event.title,
            message: &event.body,
            priority: event.priority.level(),
            tags: &event.tags,
        };

        let payload = serde_json::to_vec(&body)
            .map_err(|e| DomainError::NotifyFailed(format!("failed to encode event: {}", e)))?;

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::NotifyFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::NotifyFailed(format!(
                "endpoint answered {}",
                response.status()
            )));
        }

        debug!(topic = %self.topic, title = %event.title, "Notification published");
        Ok(())
    }
}

/// Drops events when notifications are disabled in configuration.
#[derive(Default)]
pub struct NoopNotifier;

impl NoopNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), DomainError> {
        debug!(title = %event.title, "Notifications disabled, event dropped");
        Ok(())
    }
}
