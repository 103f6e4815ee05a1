//! PostgreSQL implementation of PaymentRepository.
//!
//! Replays are detected through the unique `payments.idempotency_key`
//! column: the insert uses `ON CONFLICT DO NOTHING`, and a zero row count
//! means the key is already stored.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId};
use crate::domain::ordering::PaymentRecord;
use crate::ports::{PaymentRepository, SaveResult};

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Inserts one payment row, or reports the id already stored for its key.
pub(super) async fn insert_payment(
    conn: &mut PgConnection,
    payment: &PaymentRecord,
) -> Result<SaveResult, DomainError> {
    let cart_items: Vec<Uuid> = payment.cart_items.iter().map(|id| *id.as_uuid()).collect();
    let menu_items: Vec<Uuid> = payment.menu_items.iter().map(|id| *id.as_uuid()).collect();
    let quantity = i32::try_from(payment.quantity).map_err(|_| {
        DomainError::validation("quantity", format!("{} is too large", payment.quantity))
    })?;

    let result = sqlx::query(
        r#"
        INSERT INTO payments (
            id, email, transaction_id, price_cents, currency, quantity,
            cart_items, menu_items, item_names, status, created_at, idempotency_key
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT (idempotency_key) DO NOTHING
        "#,
    )
    .bind(payment.id.as_uuid())
    .bind(payment.email.as_str())
    .bind(&payment.transaction_id)
    .bind(payment.price.cents())
    .bind(&payment.currency)
    .bind(quantity)
    .bind(cart_items)
    .bind(menu_items)
    .bind(&payment.item_names)
    .bind(payment.status.as_str())
    .bind(payment.date.as_datetime())
    .bind(&payment.request_id)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to save payment: {}", e))
    })?;

    if result.rows_affected() == 1 {
        return Ok(SaveResult::Inserted);
    }

    // Only a keyed insert can conflict.
    let key = payment.request_id.as_deref().unwrap_or_default();
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM payments WHERE idempotency_key = $1")
            .bind(key)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to look up payment by request id: {}", e),
                )
            })?;

    match existing {
        Some((id,)) => Ok(SaveResult::AlreadyExists(PaymentId::from_uuid(id))),
        None => Err(DomainError::new(
            ErrorCode::DatabaseError,
            "Payment insert was skipped but no stored payment matches its request id",
        )),
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn save(&self, payment: &PaymentRecord) -> Result<SaveResult, DomainError> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to acquire connection: {}", e))
        })?;

        insert_payment(&mut *conn, payment).await
    }
}
