//! Atomic payment commit port.
//!
//! Stores that support transactions implement this to persist a payment
//! and retire its cart entries in one unit of work. When it is wired in,
//! the commit coordinator uses it instead of the two-step
//! `PaymentRepository::save` then `CartRepository::delete_many` path.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PaymentId};
use crate::domain::ordering::PaymentRecord;

/// What a committed unit of work did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Id of the stored payment. For a replay, the id of the original.
    pub payment_id: PaymentId,

    /// Cart entries removed by this commit.
    pub removed_count: u64,

    /// True if the request id matched an existing payment and nothing changed.
    pub replayed: bool,
}

/// Persists a payment and removes its cart entries atomically.
///
/// On error nothing has been written.
#[async_trait]
pub trait AtomicPaymentCommit: Send + Sync {
    async fn commit(&self, payment: &PaymentRecord) -> Result<CommitOutcome, DomainError>;
}
