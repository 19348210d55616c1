use crate::resolver_endpoint::ResolverEndpoint;
use chrono::Utc;

/// Message priority on the ntfy 1 (min) to 5 (urgent) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyPriority {
    Min,
    Low,
    Default,
    High,
    Urgent,
}

impl NotifyPriority {
    pub fn level(&self) -> u8 {
        match self {
            Self::Min => 1,
            Self::Low => 2,
            Self::Default => 3,
            Self::High => 4,
            Self::Urgent => 5,
        }
    }
}

/// One outbound operator notification.
///
/// Constructed at a state-transition edge, sent once, discarded. No retry
/// state survives the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub title: String,
    pub body: String,
    pub priority: NotifyPriority,
    pub tags: Vec<String>,
}

impl NotificationEvent {
    /// Primary failed every probe; forwarding switched to the backup set.
    pub fn backup_engaged(primary: &ResolverEndpoint, backups: &[ResolverEndpoint]) -> Self {
        let upstreams: Vec<String> = backups.iter().map(|b| b.forward_addr()).collect();
        Self {
            title: "DNS failover engaged".to_string(),
            body: format!(
                "Primary resolver {} failed all health probes at {}. \
                 Forwarding switched to {}. \
                 Content filtering is bypassed until the primary recovers.",
                primary.forward_addr(),
                Utc::now().to_rfc3339(),
                upstreams.join(", "),
            ),
            priority: NotifyPriority::High,
            tags: vec!["rotating_light".to_string(), "dns".to_string()],
        }
    }

    /// Primary answered a probe again; forwarding switched back.
    pub fn primary_restored(primary: &ResolverEndpoint) -> Self {
        Self {
            title: "DNS primary restored".to_string(),
            body: format!(
                "Primary resolver {} answered a health probe at {}. \
                 Forwarding switched back; content filtering is active again.",
                primary.forward_addr(),
                Utc::now().to_rfc3339(),
            ),
            priority: NotifyPriority::Default,
            tags: vec!["white_check_mark".to_string(), "dns".to_string()],
        }
    }
}
