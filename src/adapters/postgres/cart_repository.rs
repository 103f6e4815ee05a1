//! PostgreSQL implementation of CartRepository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::catalog_repository::stored_money;
use crate::domain::foundation::{CartItemId, DomainError, ErrorCode, Email, MenuItemId};
use crate::domain::ordering::CartEntry;
use crate::ports::CartRepository;

pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CartRow {
    id: Uuid,
    email: String,
    menu_item_id: Uuid,
    name: String,
    image: String,
    price_cents: i64,
}

impl TryFrom<CartRow> for CartEntry {
    type Error = DomainError;

    fn try_from(row: CartRow) -> Result<Self, Self::Error> {
        Ok(CartEntry {
            id: CartItemId::from_uuid(row.id),
            email: Email::new(row.email).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid stored email: {}", e))
            })?,
            menu_item_id: MenuItemId::from_uuid(row.menu_item_id),
            name: row.name,
            image: row.image,
            price: stored_money(row.price_cents)?,
        })
    }
}

/// Deletes every cart row whose id is in `ids`. Missing ids are ignored.
///
/// Shared with the payment ledger so both paths run the same statement.
pub(super) async fn delete_cart_rows(
    conn: &mut PgConnection,
    ids: &[CartItemId],
) -> Result<u64, DomainError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
    let result = sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
        .bind(uuids)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to delete cart items: {}", e),
            )
        })?;

    Ok(result.rows_affected())
}

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn add(&self, entry: &CartEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO cart_items (id, email, menu_item_id, name, image, price_cents)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.email.as_str())
        .bind(entry.menu_item_id.as_uuid())
        .bind(&entry.name)
        .bind(&entry.image)
        .bind(entry.price.cents())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to add cart item: {}", e))
        })?;

        Ok(())
    }

    async fn list_by_owner(&self, email: &Email) -> Result<Vec<CartEntry>, DomainError> {
        let rows: Vec<CartRow> = sqlx::query_as(
            r#"
            SELECT id, email, menu_item_id, name, image, price_cents
            FROM cart_items
            WHERE email = $1
            ORDER BY created_at
            "#,
        )
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list cart: {}", e))
        })?;

        rows.into_iter().map(CartEntry::try_from).collect()
    }

    async fn delete_owned(&self, id: &CartItemId, owner: &Email) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND email = $2")
            .bind(id.as_uuid())
            .bind(owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete cart item: {}", e),
                )
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to acquire connection: {}", e))
        })?;

        delete_cart_rows(&mut *conn, ids).await
    }
}
