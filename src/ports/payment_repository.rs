//! Payment repository port.
//!
//! Payments are append-only. A record carrying a client-supplied request id
//! is stored at most once per id; implementations should enforce this with
//! a unique constraint so concurrent replays cannot both insert.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PaymentId};
use crate::domain::ordering::PaymentRecord;

/// Result of saving a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// The record was inserted.
    Inserted,
    /// A payment with the same request id exists; nothing was written.
    AlreadyExists(PaymentId),
}

/// Repository port for payment records.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Append a payment.
    ///
    /// Returns `SaveResult::AlreadyExists` with the stored id when the
    /// record's request id has been seen before.
    async fn save(&self, payment: &PaymentRecord) -> Result<SaveResult, DomainError>;
}
