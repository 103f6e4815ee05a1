//! PostgreSQL implementation of StatsReader.
//!
//! Both aggregations run in SQL. Order stats unnest each payment's menu
//! item ids and join them to the current menu, so ids that have since been
//! removed from the menu drop out of the totals.

use async_trait::async_trait;
use sqlx::PgPool;

use super::catalog_repository::stored_money;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ordering::{AdminStats, CategoryStats};
use crate::ports::StatsReader;

pub struct PostgresStatsReader {
    pool: PgPool,
}

impl PostgresStatsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AdminStatsRow {
    customers: i64,
    menu: i64,
    orders: i64,
    revenue_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryStatsRow {
    category: String,
    count: i64,
    total_cents: i64,
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

#[async_trait]
impl StatsReader for PostgresStatsReader {
    async fn admin_stats(&self) -> Result<AdminStats, DomainError> {
        let row: AdminStatsRow = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS customers,
                (SELECT COUNT(*) FROM menu_items) AS menu,
                (SELECT COUNT(*) FROM payments) AS orders,
                (SELECT COALESCE(SUM(price_cents), 0)::BIGINT FROM payments) AS revenue_cents
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to read admin stats: {}", e))
        })?;

        Ok(AdminStats {
            customers: count(row.customers),
            menu: count(row.menu),
            orders: count(row.orders),
            revenue: stored_money(row.revenue_cents)?,
        })
    }

    async fn order_stats(&self) -> Result<Vec<CategoryStats>, DomainError> {
        let rows: Vec<CategoryStatsRow> = sqlx::query_as(
            r#"
            SELECT
                m.category AS category,
                COUNT(*) AS count,
                COALESCE(SUM(m.price_cents), 0)::BIGINT AS total_cents
            FROM payments p
            CROSS JOIN LATERAL unnest(p.menu_items) AS ordered(menu_item_id)
            JOIN menu_items m ON m.id = ordered.menu_item_id
            GROUP BY m.category
            ORDER BY m.category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to read order stats: {}", e))
        })?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryStats {
                    category: row.category,
                    count: count(row.count),
                    total: stored_money(row.total_cents)?,
                })
            })
            .collect()
    }
}
