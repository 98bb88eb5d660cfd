use thiserror::Error;

/// Errors raised by notification-center operations.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notification '{0}' not found")]
    NotFound(String),
}
