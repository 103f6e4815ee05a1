//! Recording notifier, a test double.
//!
//! Keeps every attempt for the life of the value, so it is not wired into
//! the server.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::PaymentId;
use crate::domain::ordering::PaymentRecord;
use crate::ports::{NotificationError, PaymentNotifier};

/// Records every confirmation attempt; optionally fails each one.
#[derive(Default)]
pub struct RecordingNotifier {
    attempts: Mutex<Vec<PaymentId>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails after being recorded.
    pub fn failing() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Payment ids of every attempt so far, in order.
    pub fn attempts(&self) -> Vec<PaymentId> {
        self.attempts
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    /// Waits until at least `count` attempts were made, up to `timeout`.
    ///
    /// Deliveries run on spawned tasks, so tests poll for them.
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.attempts().len() >= count {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl PaymentNotifier for RecordingNotifier {
    async fn payment_confirmed(&self, payment: &PaymentRecord) -> Result<(), NotificationError> {
        if let Ok(mut attempts) = self.attempts.lock() {
            attempts.push(payment.id);
        }
        if self.fail {
            return Err(NotificationError::Transport(
                "recording notifier configured to fail".to_string(),
            ));
        }
        tracing::info!(payment_id = %payment.id, email = %payment.email, "Payment confirmation recorded");
        Ok(())
    }
}
