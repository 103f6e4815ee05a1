//! In-memory implementation of the store ports.
//!
//! All collections sit behind one `tokio::sync::RwLock`, so each port call
//! observes a consistent snapshot. There is no transaction spanning two
//! calls; the commit coordinator uses the two-step path against this store.
//!
//! # Failure injection
//!
//! Tests can make payment writes, cart deletes or user reads fail to drive
//! the error paths of the coordinator and the authorization gate.
//!
//! ```ignore
//! let store = Arc::new(InMemoryStore::new());
//! store.fail_payment_saves(true);
//! let err = handler.handle(cmd).await.unwrap_err();
//! assert!(matches!(err, OrderingError::Persistence(_)));
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CartItemId, DomainError, Email, MenuItemId, PaymentId, UserId};
use crate::domain::ordering::{
    AdminStats, CartEntry, CategoryStats, MenuItem, OrderStats, PaymentRecord, Review, User,
};
use crate::ports::{
    CartRepository, CatalogRepository, PaymentRepository, SaveResult, StatsReader,
    UserRepository,
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    menu: Vec<MenuItem>,
    reviews: Vec<Review>,
    carts: HashMap<CartItemId, CartEntry>,
    payments: Vec<PaymentRecord>,
    request_ids: HashMap<String, PaymentId>,
}

/// Process-local store implementing every store port.
#[derive(Default)]
pub struct InMemoryStore {
    data: RwLock<Collections>,
    fail_payment_saves: AtomicBool,
    fail_cart_deletes: AtomicBool,
    fail_user_reads: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Inserts a user directly, bypassing the uniqueness check.
    pub async fn seed_user(&self, user: User) {
        self.data.write().await.users.push(user);
    }

    pub async fn seed_menu_item(&self, item: MenuItem) {
        self.data.write().await.menu.push(item);
    }

    pub async fn seed_review(&self, review: Review) {
        self.data.write().await.reviews.push(review);
    }

    pub async fn seed_cart_entry(&self, entry: CartEntry) {
        self.data.write().await.carts.insert(entry.id, entry);
    }

    // === Failure injection ===

    pub fn fail_payment_saves(&self, fail: bool) {
        self.fail_payment_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_cart_deletes(&self, fail: bool) {
        self.fail_cart_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_user_reads(&self, fail: bool) {
        self.fail_user_reads.store(fail, Ordering::SeqCst);
    }

    // === Inspection ===

    /// Returns all stored payments in insertion order.
    pub async fn payments(&self) -> Vec<PaymentRecord> {
        self.data.read().await.payments.clone()
    }

    /// Returns true if a cart entry with this id exists.
    pub async fn has_cart_entry(&self, id: &CartItemId) -> bool {
        self.data.read().await.carts.contains_key(id)
    }

    pub async fn cart_len(&self) -> usize {
        self.data.read().await.carts.len()
    }

    pub async fn user_count(&self) -> usize {
        self.data.read().await.users.len()
    }

    fn check(flag: &AtomicBool, operation: &str) -> Result<(), DomainError> {
        if flag.load(Ordering::SeqCst) {
            return Err(DomainError::database(format!(
                "simulated failure during {}",
                operation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Self::check(&self.fail_user_reads, "user lookup")?;
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, DomainError> {
        let mut data = self.data.write().await;
        if data.users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        data.users.push(user.clone());
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Self::check(&self.fail_user_reads, "user listing")?;
        Ok(self.data.read().await.users.clone())
    }

    async fn promote_to_admin(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut data = self.data.write().await;
        match data.users.iter_mut().find(|u| &u.id == id) {
            Some(user) => {
                user.promote();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self.data.read().await.menu.clone())
    }

    async fn add_menu_item(&self, item: &MenuItem) -> Result<(), DomainError> {
        self.data.write().await.menu.push(item.clone());
        Ok(())
    }

    async fn delete_menu_item(&self, id: &MenuItemId) -> Result<bool, DomainError> {
        let mut data = self.data.write().await;
        let before = data.menu.len();
        data.menu.retain(|m| &m.id != id);
        Ok(data.menu.len() < before)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, DomainError> {
        Ok(self.data.read().await.reviews.clone())
    }
}

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn add(&self, entry: &CartEntry) -> Result<(), DomainError> {
        self.data.write().await.carts.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn list_by_owner(&self, email: &Email) -> Result<Vec<CartEntry>, DomainError> {
        let data = self.data.read().await;
        let mut entries: Vec<CartEntry> = data
            .carts
            .values()
            .filter(|e| e.is_owned_by(email))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn delete_owned(&self, id: &CartItemId, owner: &Email) -> Result<bool, DomainError> {
        Self::check(&self.fail_cart_deletes, "cart delete")?;
        let mut data = self.data.write().await;
        let owned = data.carts.get(id).is_some_and(|e| e.is_owned_by(owner));
        if owned {
            data.carts.remove(id);
        }
        Ok(owned)
    }

    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError> {
        Self::check(&self.fail_cart_deletes, "cart bulk delete")?;
        let mut data = self.data.write().await;
        let removed = ids
            .iter()
            .filter(|id| data.carts.remove(*id).is_some())
            .count();
        Ok(removed as u64)
    }
}

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn save(&self, payment: &PaymentRecord) -> Result<SaveResult, DomainError> {
        Self::check(&self.fail_payment_saves, "payment insert")?;
        let mut data = self.data.write().await;
        if let Some(key) = &payment.request_id {
            if let Some(existing) = data.request_ids.get(key) {
                return Ok(SaveResult::AlreadyExists(*existing));
            }
            data.request_ids.insert(key.clone(), payment.id);
        }
        data.payments.push(payment.clone());
        Ok(SaveResult::Inserted)
    }
}

#[async_trait]
impl StatsReader for InMemoryStore {
    async fn admin_stats(&self) -> Result<AdminStats, DomainError> {
        let data = self.data.read().await;
        Ok(AdminStats {
            customers: data.users.len() as u64,
            menu: data.menu.len() as u64,
            orders: data.payments.len() as u64,
            revenue: OrderStats::revenue(&data.payments),
        })
    }

    async fn order_stats(&self) -> Result<Vec<CategoryStats>, DomainError> {
        let data = self.data.read().await;
        Ok(OrderStats::aggregate(&data.payments, &data.menu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Timestamp};
    use crate::domain::ordering::PaymentStatus;

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    fn cart_entry(owner: &str) -> CartEntry {
        CartEntry::new(
            email(owner),
            MenuItemId::new(),
            "Soup",
            "soup.png",
            Money::from_cents(800).unwrap(),
        )
    }

    fn payment(request_id: Option<&str>) -> PaymentRecord {
        PaymentRecord {
            id: PaymentId::new(),
            email: email("a@x.com"),
            transaction_id: "pi_1".into(),
            price: Money::from_cents(800).unwrap(),
            currency: "usd".into(),
            quantity: 1,
            cart_items: vec![],
            menu_items: vec![],
            item_names: vec![],
            status: PaymentStatus::Pending,
            date: Timestamp::now(),
            request_id: request_id.map(String::from),
        }
    }

    #[tokio::test]
    async fn insert_if_absent_keeps_one_record_per_email() {
        let store = InMemoryStore::new();
        assert!(store
            .insert_if_absent(&User::new(None, email("a@x.com")))
            .await
            .unwrap());
        assert!(!store
            .insert_if_absent(&User::new(Some("Ann".into()), email("a@x.com")))
            .await
            .unwrap());
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn promote_unknown_user_returns_false() {
        let store = InMemoryStore::new();
        assert!(!store.promote_to_admin(&UserId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_many_is_idempotent() {
        let store = InMemoryStore::new();
        let a = cart_entry("a@x.com");
        let b = cart_entry("a@x.com");
        let ids = vec![a.id, b.id];
        store.seed_cart_entry(a).await;
        store.seed_cart_entry(b).await;

        assert_eq!(store.delete_many(&ids).await.unwrap(), 2);
        assert_eq!(store.delete_many(&ids).await.unwrap(), 0);
        assert_eq!(store.cart_len().await, 0);
    }

    #[tokio::test]
    async fn delete_owned_ignores_other_owners() {
        let store = InMemoryStore::new();
        let entry = cart_entry("a@x.com");
        let id = entry.id;
        store.seed_cart_entry(entry).await;

        assert!(!store.delete_owned(&id, &email("b@x.com")).await.unwrap());
        assert!(store.has_cart_entry(&id).await);
        assert!(store.delete_owned(&id, &email("a@x.com")).await.unwrap());
        assert!(!store.has_cart_entry(&id).await);
    }

    #[tokio::test]
    async fn save_detects_replayed_request_id() {
        let store = InMemoryStore::new();
        let first = payment(Some("req-1"));
        assert_eq!(store.save(&first).await.unwrap(), SaveResult::Inserted);
        assert_eq!(
            store.save(&payment(Some("req-1"))).await.unwrap(),
            SaveResult::AlreadyExists(first.id)
        );
        assert_eq!(store.payments().await.len(), 1);
    }

    #[tokio::test]
    async fn save_without_request_id_always_inserts() {
        let store = InMemoryStore::new();
        store.save(&payment(None)).await.unwrap();
        store.save(&payment(None)).await.unwrap();
        assert_eq!(store.payments().await.len(), 2);
    }

    #[tokio::test]
    async fn injected_failures_surface_as_database_errors() {
        let store = InMemoryStore::new();
        store.fail_payment_saves(true);
        let err = store.save(&payment(None)).await.unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::DatabaseError);
        assert!(store.payments().await.is_empty());
    }

    #[tokio::test]
    async fn admin_stats_counts_collections() {
        let store = InMemoryStore::new();
        store.seed_user(User::new(None, email("a@x.com"))).await;
        store.save(&payment(None)).await.unwrap();
        store.save(&payment(None)).await.unwrap();

        let stats = store.admin_stats().await.unwrap();
        assert_eq!(stats.customers, 1);
        assert_eq!(stats.menu, 0);
        assert_eq!(stats.orders, 2);
        assert_eq!(stats.revenue.cents(), 1600);
    }
}
