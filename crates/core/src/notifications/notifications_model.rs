//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Warning,
    Info,
    Error,
    Success,
}

/// An advisory message derived from (or pushed about) the ledger.
/// Notifications never affect ledger state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub severity: NotificationSeverity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Starts unread; flipped by `mark_read`.
    pub read: bool,
}

/// Input model for pushing a notification into the center.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub severity: NotificationSeverity,
    pub title: String,
    pub message: String,
}
