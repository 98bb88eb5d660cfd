use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use log::debug;
use uuid::Uuid;

use super::notifications_constants::{INACTIVITY_DAYS, LOW_BALANCE_RATIO, RETENTION_DAYS};
use super::notifications_errors::NotificationError;
use super::notifications_model::{NewNotification, Notification, NotificationSeverity};
use crate::errors::Result;
use crate::ledger::LedgerServiceTrait;

/// Notification center.
///
/// Scans the ledger read-only and keeps its own collection of advisory
/// messages, newest first. Generation is additive; marking read, clearing,
/// and sweeping are separate operations with no effect on the ledger.
pub struct NotificationService {
    ledger: Arc<dyn LedgerServiceTrait>,
    notifications: RwLock<Vec<Notification>>,
}

impl NotificationService {
    pub fn new(ledger: Arc<dyn LedgerServiceTrait>) -> Self {
        Self {
            ledger,
            notifications: RwLock::new(Vec::new()),
        }
    }

    /// Pushes a notification into the center, newest first. It starts
    /// unread.
    pub fn notify(&self, input: NewNotification) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            severity: input.severity,
            title: input.title,
            message: input.message,
            timestamp: Utc::now(),
            read: false,
        };
        self.notifications
            .write()
            .unwrap()
            .insert(0, notification.clone());
        notification
    }

    /// Scans the current ledger snapshot and emits advisory notifications:
    /// a warning when an investment sits below 10% of its initial balance,
    /// and an info notice when its most recently recorded transaction is
    /// older than 90 days. Returns what this scan produced.
    pub fn generate(&self) -> Result<Vec<Notification>> {
        let investments = self.ledger.get_investments()?;
        let transactions = self.ledger.get_transactions()?;
        let now = Utc::now();
        let mut generated = Vec::new();

        for investment in &investments {
            if investment.current_balance < investment.initial_balance * LOW_BALANCE_RATIO {
                generated.push(self.notify(NewNotification {
                    severity: NotificationSeverity::Warning,
                    title: "Low Investment Balance".to_string(),
                    message: format!(
                        "Your investment \"{}\" is below 10% of initial balance.",
                        investment.name
                    ),
                }));
            }

            // Most recently *recorded* transaction, not the latest by
            // timestamp, in case the two orders diverge.
            let last_recorded = transactions
                .iter()
                .rev()
                .find(|transaction| transaction.investment_id == investment.id);
            if let Some(last) = last_recorded {
                if now.signed_duration_since(last.timestamp) > Duration::days(INACTIVITY_DAYS) {
                    generated.push(self.notify(NewNotification {
                        severity: NotificationSeverity::Info,
                        title: "Inactive Investment".to_string(),
                        message: format!(
                            "No transactions for \"{}\" in the last 3 months.",
                            investment.name
                        ),
                    }));
                }
            }
        }

        debug!("Notification scan produced {} notifications", generated.len());
        Ok(generated)
    }

    /// Current notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().unwrap().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .read()
            .unwrap()
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    pub fn mark_read(&self, notification_id: &str) -> Result<()> {
        let mut notifications = self.notifications.write().unwrap();
        match notifications
            .iter_mut()
            .find(|notification| notification.id == notification_id)
        {
            Some(notification) => {
                notification.read = true;
                Ok(())
            }
            None => Err(NotificationError::NotFound(notification_id.to_string()).into()),
        }
    }

    /// Empties the center.
    pub fn clear(&self) {
        self.notifications.write().unwrap().clear();
    }

    /// Prunes notifications older than the retention window.
    pub fn sweep(&self) {
        self.sweep_before(Utc::now() - Duration::days(RETENTION_DAYS));
    }

    /// Prunes notifications at or before the given cutoff.
    pub fn sweep_before(&self, cutoff: DateTime<Utc>) {
        self.notifications
            .write()
            .unwrap()
            .retain(|notification| notification.timestamp > cutoff);
    }
}
