//! Transactional payment commit for PostgreSQL.
//!
//! Inserts the payment and deletes its cart rows inside one transaction,
//! so a failure part way leaves neither change behind.

use async_trait::async_trait;
use sqlx::PgPool;

use super::cart_repository::delete_cart_rows;
use super::payment_repository::insert_payment;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ordering::PaymentRecord;
use crate::ports::{AtomicPaymentCommit, CommitOutcome, SaveResult};

/// PostgreSQL implementation of the AtomicPaymentCommit port.
pub struct PostgresPaymentLedger {
    pool: PgPool,
}

impl PostgresPaymentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AtomicPaymentCommit for PostgresPaymentLedger {
    async fn commit(&self, payment: &PaymentRecord) -> Result<CommitOutcome, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to start transaction: {}", e))
        })?;

        let outcome = match insert_payment(&mut *tx, payment).await? {
            SaveResult::AlreadyExists(payment_id) => CommitOutcome {
                payment_id,
                removed_count: 0,
                replayed: true,
            },
            SaveResult::Inserted => {
                let removed_count =
                    delete_cart_rows(&mut *tx, &payment.distinct_cart_items()).await?;
                CommitOutcome {
                    payment_id: payment.id,
                    removed_count,
                    replayed: false,
                }
            }
        };

        tx.commit().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to commit transaction: {}", e))
        })?;

        tracing::debug!(
            payment_id = %outcome.payment_id,
            removed = outcome.removed_count,
            replayed = outcome.replayed,
            "payment committed"
        );

        Ok(outcome)
    }
}
