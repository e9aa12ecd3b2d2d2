use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// A usage-tracking record. The serialized shape keeps the original event
/// names: `{"action":"email_generated","name_length":8,"timestamp":"..."}`.
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UsageEvent {
    EmailGenerated {
        name_length: usize,
        timestamp: DateTime<Utc>,
    },
    EmailCopied {
        timestamp: DateTime<Utc>,
    },
}

impl UsageEvent {
    /// Event for a successful generation. `name_length` counts the trimmed
    /// name as the user typed it, before normalization.
    pub fn email_generated(name: &str, at: DateTime<Utc>) -> Self {
        Self::EmailGenerated {
            name_length: name.trim().chars().count(),
            timestamp: at,
        }
    }

    pub fn email_copied(at: DateTime<Utc>) -> Self {
        Self::EmailCopied { timestamp: at }
    }
}

/// Records a usage event on the `usage` tracing target. Fire-and-forget: a
/// serialization failure is downgraded to a debug trace and never reaches
/// the caller.
pub fn track(event: &UsageEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => info!(target: "usage", %payload, "usage event"),
        Err(e) => debug!("failed to serialize usage event: {}", e),
    }
}
