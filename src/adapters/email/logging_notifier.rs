//! Log-only notifier for deployments without mail credentials.

use async_trait::async_trait;

use crate::domain::ordering::PaymentRecord;
use crate::ports::{NotificationError, PaymentNotifier};

/// Writes each confirmation to the log and keeps no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl PaymentNotifier for LoggingNotifier {
    async fn payment_confirmed(&self, payment: &PaymentRecord) -> Result<(), NotificationError> {
        tracing::info!(
            payment_id = %payment.id,
            email = %payment.email,
            transaction_id = %payment.transaction_id,
            "Payment confirmation not sent, no mail transport configured"
        );
        Ok(())
    }
}
