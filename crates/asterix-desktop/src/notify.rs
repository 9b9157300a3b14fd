//! Notification queue
//!
//! Display-only toasts pushed by the kernel. Each entry expires a fixed time
//! after it was pushed and can be dismissed before then.

use serde::{Deserialize, Serialize};

/// Default time a notification stays visible
pub const NOTIFICATION_TTL_MS: u64 = 4_500;

/// Notification severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A pushed notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: u64,
    pub expires_at: u64,
}

/// Pending notifications, oldest first
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    next_id: u64,
    ttl_ms: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL_MS)
    }
}

impl NotificationQueue {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            ttl_ms,
        }
    }

    /// Push a message at `now` and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: u64) -> String {
        let id = format!("notif-{}", self.next_id);
        self.next_id += 1;
        self.entries.push(Notification {
            id: id.clone(),
            message: message.into(),
            severity,
            timestamp: now,
            expires_at: now.saturating_add(self.ttl_ms),
        });
        id
    }

    /// Drop entries whose time is up; returns how many were dropped
    pub fn expire(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        before - self.entries.len()
    }

    pub fn dismiss(&mut self, id: &str) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
