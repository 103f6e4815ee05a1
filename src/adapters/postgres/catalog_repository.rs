//! PostgreSQL implementation of CatalogRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, MenuItemId, Money, ReviewId};
use crate::domain::ordering::{MenuItem, Review};
use crate::ports::CatalogRepository;

pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: Uuid,
    name: String,
    recipe: String,
    image: String,
    category: String,
    price_cents: i64,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = DomainError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        Ok(MenuItem {
            id: MenuItemId::from_uuid(row.id),
            name: row.name,
            recipe: row.recipe,
            image: row.image,
            category: row.category,
            price: stored_money(row.price_cents)?,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    name: String,
    details: String,
    rating: i16,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating = u8::try_from(row.rating)
            .ok()
            .filter(|r| *r <= Review::MAX_RATING)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid stored rating: {}", row.rating),
                )
            })?;

        Ok(Review {
            id: ReviewId::from_uuid(row.id),
            name: row.name,
            details: row.details,
            rating,
        })
    }
}

/// Converts a stored `price_cents` column back to money.
pub(super) fn stored_money(cents: i64) -> Result<Money, DomainError> {
    Money::from_cents(cents).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid stored price: {}", e))
    })
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, recipe, image, category, price_cents
            FROM menu_items
            ORDER BY category, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list menu: {}", e))
        })?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }

    async fn add_menu_item(&self, item: &MenuItem) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO menu_items (id, name, recipe, image, category, price_cents)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(&item.name)
        .bind(&item.recipe)
        .bind(&item.image)
        .bind(&item.category)
        .bind(item.price.cents())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to add menu item: {}", e))
        })?;

        Ok(())
    }

    async fn delete_menu_item(&self, id: &MenuItemId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete menu item: {}", e),
                )
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, DomainError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, name, details, rating
            FROM reviews
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list reviews: {}", e))
        })?;

        rows.into_iter().map(Review::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_row_converts_price_from_cents() {
        let row = MenuItemRow {
            id: Uuid::new_v4(),
            name: "Caesar".to_string(),
            recipe: "lettuce".to_string(),
            image: "caesar.png".to_string(),
            category: "salad".to_string(),
            price_cents: 1450,
        };
        let item = MenuItem::try_from(row).unwrap();
        assert_eq!(item.price.to_string(), "14.50");
    }

    #[test]
    fn negative_stored_price_is_rejected() {
        assert!(stored_money(-1).is_err());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let row = ReviewRow {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            details: "ok".to_string(),
            rating: 9,
        };
        assert!(Review::try_from(row).is_err());
    }
}
