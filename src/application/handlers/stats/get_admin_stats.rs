//! GetAdminStatsHandler - Query handler for dashboard headline figures.

use std::sync::Arc;

use crate::domain::ordering::{AdminStats, OrderingError};
use crate::ports::StatsReader;

/// Query for counts of customers, menu items, orders, and total revenue.
#[derive(Debug, Clone)]
pub struct GetAdminStatsQuery;

pub struct GetAdminStatsHandler {
    reader: Arc<dyn StatsReader>,
}

impl GetAdminStatsHandler {
    pub fn new(reader: Arc<dyn StatsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: GetAdminStatsQuery) -> Result<AdminStats, OrderingError> {
        self.reader
            .admin_stats()
            .await
            .map_err(|e| OrderingError::persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Money};
    use crate::domain::ordering::CategoryStats;
    use async_trait::async_trait;

    struct MockStatsReader {
        fail_read: bool,
    }

    #[async_trait]
    impl StatsReader for MockStatsReader {
        async fn admin_stats(&self) -> Result<AdminStats, DomainError> {
            if self.fail_read {
                return Err(DomainError::database("Simulated read failure"));
            }
            Ok(AdminStats {
                customers: 3,
                menu: 12,
                orders: 5,
                revenue: Money::from_cents(10_450).unwrap(),
            })
        }

        async fn order_stats(&self) -> Result<Vec<CategoryStats>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn returns_reader_figures() {
        let handler = GetAdminStatsHandler::new(Arc::new(MockStatsReader { fail_read: false }));
        let stats = handler.handle(GetAdminStatsQuery).await.unwrap();
        assert_eq!(stats.customers, 3);
        assert_eq!(stats.revenue.to_string(), "104.50");
    }

    #[tokio::test]
    async fn read_failure_is_persistence_error() {
        let handler = GetAdminStatsHandler::new(Arc::new(MockStatsReader { fail_read: true }));
        let err = handler.handle(GetAdminStatsQuery).await.unwrap_err();
        assert!(matches!(err, OrderingError::Persistence(_)));
    }
}
