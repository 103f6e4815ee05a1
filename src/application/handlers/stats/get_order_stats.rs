//! GetOrderStatsHandler - Query handler for the per-category breakdown.

use std::sync::Arc;

use crate::domain::ordering::{CategoryStats, OrderingError};
use crate::ports::StatsReader;

#[derive(Debug, Clone)]
pub struct GetOrderStatsQuery;

pub struct GetOrderStatsHandler {
    reader: Arc<dyn StatsReader>,
}

impl GetOrderStatsHandler {
    pub fn new(reader: Arc<dyn StatsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetOrderStatsQuery,
    ) -> Result<Vec<CategoryStats>, OrderingError> {
        self.reader
            .order_stats()
            .await
            .map_err(|e| OrderingError::persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{CartItemId, Email, Money, PaymentId, Timestamp};
    use crate::domain::ordering::{MenuItem, PaymentRecord, PaymentStatus};
    use crate::ports::PaymentRepository;

    #[tokio::test]
    async fn breaks_down_payments_by_category() {
        let store = Arc::new(InMemoryStore::new());
        let soup = MenuItem::new("Soup", "", "", "soup", Money::from_cents(850).unwrap()).unwrap();
        let pizza =
            MenuItem::new("Pizza", "", "", "pizza", Money::from_cents(1400).unwrap()).unwrap();
        store.seed_menu_item(soup.clone()).await;
        store.seed_menu_item(pizza.clone()).await;
        store
            .save(&PaymentRecord {
                id: PaymentId::new(),
                email: Email::new("a@x.com").unwrap(),
                transaction_id: "pi_1".into(),
                price: Money::from_cents(3100).unwrap(),
                currency: "usd".into(),
                quantity: 3,
                cart_items: vec![CartItemId::new()],
                menu_items: vec![soup.id, pizza.id, soup.id],
                item_names: vec![],
                status: PaymentStatus::Pending,
                date: Timestamp::now(),
                request_id: None,
            })
            .await
            .unwrap();

        let stats = GetOrderStatsHandler::new(store)
            .handle(GetOrderStatsQuery)
            .await
            .unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "pizza");
        assert_eq!(stats[0].count, 1);
        assert_eq!(stats[1].category, "soup");
        assert_eq!(stats[1].count, 2);
        assert_eq!(stats[1].total.cents(), 1700);
    }
}
