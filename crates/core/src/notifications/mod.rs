//! Notifications module - advisory alerts derived from the ledger.

mod notifications_constants;
mod notifications_errors;
mod notifications_model;
mod notifications_service;


pub use notifications_constants::*;
pub use notifications_errors::NotificationError;
pub use notifications_model::{NewNotification, Notification, NotificationSeverity};
pub use notifications_service::NotificationService;
