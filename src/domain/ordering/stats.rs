//! Admin dashboard aggregations.
//!
//! `OrderStats::aggregate` is the reference computation used by the
//! in-memory store; the PostgreSQL reader computes the same figures in SQL.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::{MenuItem, PaymentRecord};
use crate::domain::foundation::{MenuItemId, Money};

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub customers: u64,
    pub menu: u64,
    pub orders: u64,
    pub revenue: Money,
}

/// Order count and revenue for one menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: u64,
    /// Serialized in major units; cents make the two-place rounding exact.
    pub total: Money,
}

/// Per-category breakdown of everything ever ordered.
pub struct OrderStats;

impl OrderStats {
    /// Joins each payment's menu item ids against the menu and groups by
    /// category. Every occurrence counts once, duplicates included. Ids no
    /// longer on the menu are skipped. Output is ordered by category name.
    pub fn aggregate(payments: &[PaymentRecord], menu: &[MenuItem]) -> Vec<CategoryStats> {
        let by_id: HashMap<MenuItemId, &MenuItem> = menu.iter().map(|m| (m.id, m)).collect();

        let mut groups: BTreeMap<&str, (u64, Money)> = BTreeMap::new();
        for item in payments
            .iter()
            .flat_map(|p| p.menu_items.iter())
            .filter_map(|id| by_id.get(id))
        {
            let entry = groups.entry(item.category.as_str()).or_insert((0, Money::ZERO));
            entry.0 += 1;
            entry.1 = entry.1 + item.price;
        }

        groups
            .into_iter()
            .map(|(category, (count, total))| CategoryStats {
                category: category.to_string(),
                count,
                total,
            })
            .collect()
    }

    /// Sums payment amounts.
    pub fn revenue(payments: &[PaymentRecord]) -> Money {
        payments.iter().map(|p| p.price).sum()
    }
}
