//! Stats reader port (read side).
//!
//! Read-only aggregations for the admin dashboard. Implementations may
//! compute these in the store (SQL) or in memory.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ordering::{AdminStats, CategoryStats};

/// Reader port for dashboard statistics.
#[async_trait]
pub trait StatsReader: Send + Sync {
    /// Counts of users, menu items and payments, plus total revenue.
    async fn admin_stats(&self) -> Result<AdminStats, DomainError>;

    /// Orders and revenue per menu category, ordered by category name.
    async fn order_stats(&self) -> Result<Vec<CategoryStats>, DomainError>;
}
