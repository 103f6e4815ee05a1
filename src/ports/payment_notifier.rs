//! Payment notifier port.
//!
//! Sends the confirmation message after a payment has been committed. The
//! commit coordinator runs it as a detached task, so failures are logged
//! and never reach the client.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ordering::PaymentRecord;

/// Errors from notification delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The mail service could not be reached.
    #[error("Notification transport failed: {0}")]
    Transport(String),

    /// The mail service answered with an error status.
    #[error("Notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers payment confirmations.
#[async_trait]
pub trait PaymentNotifier: Send + Sync {
    async fn payment_confirmed(&self, payment: &PaymentRecord) -> Result<(), NotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn PaymentNotifier) {}
    }

    #[test]
    fn rejected_displays_status() {
        let err = NotificationError::Rejected {
            status: 401,
            body: "Forbidden".into(),
        };
        assert_eq!(
            err.to_string(),
            "Notification rejected with status 401: Forbidden"
        );
    }
}
