//! CommitPaymentHandler - Command handler for recording a completed payment.
//!
//! Persists the payment, retires the cart entries it paid for, and sends
//! the confirmation in the background.
//!
//! # Ordering
//!
//! 1. Persist the payment. On failure nothing else happens.
//! 2. Remove the referenced cart entries. A failure here is reported but
//!    the payment stays recorded.
//! 3. Spawn the confirmation notification. Its outcome is only logged.
//!
//! When an `AtomicPaymentCommit` is configured, steps 1 and 2 run as one
//! transaction instead.

use std::sync::Arc;

use crate::domain::foundation::PaymentId;
use crate::domain::ordering::{OrderingError, PaymentRecord};
use crate::ports::{
    AtomicPaymentCommit, CartRepository, PaymentNotifier, PaymentRepository, SaveResult,
};

/// Command to commit a completed payment.
#[derive(Debug, Clone)]
pub struct CommitPaymentCommand {
    pub payment: PaymentRecord,
}

/// Result of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitPaymentResult {
    /// Stored payment id. For a replay, the id of the original payment.
    pub payment_id: PaymentId,

    /// Cart entries removed by this call.
    pub removed_count: u64,

    /// True if the request id matched an earlier payment.
    pub replayed: bool,
}

/// Handler for committing payments.
pub struct CommitPaymentHandler {
    payments: Arc<dyn PaymentRepository>,
    carts: Arc<dyn CartRepository>,
    notifier: Arc<dyn PaymentNotifier>,
    atomic: Option<Arc<dyn AtomicPaymentCommit>>,
}

impl CommitPaymentHandler {
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        carts: Arc<dyn CartRepository>,
        notifier: Arc<dyn PaymentNotifier>,
    ) -> Self {
        Self {
            payments,
            carts,
            notifier,
            atomic: None,
        }
    }

    /// Uses a transactional store for the persist-and-retire step.
    pub fn with_atomic_commit(mut self, atomic: Arc<dyn AtomicPaymentCommit>) -> Self {
        self.atomic = Some(atomic);
        self
    }

    pub async fn handle(
        &self,
        cmd: CommitPaymentCommand,
    ) -> Result<CommitPaymentResult, OrderingError> {
        let payment = cmd.payment;
        payment.validate()?;

        match &self.atomic {
            Some(atomic) => self.commit_atomically(atomic.as_ref(), payment).await,
            None => self.commit_in_steps(payment).await,
        }
    }

    async fn commit_atomically(
        &self,
        atomic: &dyn AtomicPaymentCommit,
        payment: PaymentRecord,
    ) -> Result<CommitPaymentResult, OrderingError> {
        let outcome = atomic.commit(&payment).await.map_err(|e| {
            tracing::error!(payment_id = %payment.id, error = %e, "Payment commit failed");
            OrderingError::persistence(e.to_string())
        })?;

        if outcome.replayed {
            tracing::info!(payment_id = %outcome.payment_id, "Payment replay ignored");
        } else {
            tracing::info!(
                payment_id = %outcome.payment_id,
                removed = outcome.removed_count,
                "Payment committed"
            );
            self.dispatch_notification(payment);
        }

        Ok(CommitPaymentResult {
            payment_id: outcome.payment_id,
            removed_count: outcome.removed_count,
            replayed: outcome.replayed,
        })
    }

    async fn commit_in_steps(
        &self,
        payment: PaymentRecord,
    ) -> Result<CommitPaymentResult, OrderingError> {
        // 1. Persist; the cart is untouched if this fails
        let saved = self.payments.save(&payment).await.map_err(|e| {
            tracing::error!(payment_id = %payment.id, error = %e, "Payment insert failed");
            OrderingError::persistence(e.to_string())
        })?;

        if let SaveResult::AlreadyExists(original) = saved {
            tracing::info!(payment_id = %original, "Payment replay ignored");
            return Ok(CommitPaymentResult {
                payment_id: original,
                removed_count: 0,
                replayed: true,
            });
        }

        // 2. Retire the cart entries
        let ids = payment.distinct_cart_items();
        let cleared = if ids.is_empty() {
            Ok(0)
        } else {
            self.carts.delete_many(&ids).await
        };

        // 3. Confirmation goes out either way; the payment is recorded
        let payment_id = payment.id;
        self.dispatch_notification(payment);

        let removed_count = cleared.map_err(|e| {
            tracing::error!(payment_id = %payment_id, error = %e, "Cart clear failed after payment");
            OrderingError::cart_clear_failed(payment_id, e.to_string())
        })?;

        tracing::info!(payment_id = %payment_id, removed = removed_count, "Payment committed");

        Ok(CommitPaymentResult {
            payment_id,
            removed_count,
            replayed: false,
        })
    }

    fn dispatch_notification(&self, payment: PaymentRecord) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            match notifier.payment_confirmed(&payment).await {
                Ok(()) => tracing::debug!(payment_id = %payment.id, "Payment confirmation sent"),
                Err(e) => tracing::warn!(
                    payment_id = %payment.id,
                    error = %e,
                    "Payment confirmation failed"
                ),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingNotifier;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{
        CartItemId, DomainError, Email, MenuItemId, Money, Timestamp,
    };
    use crate::domain::ordering::{CartEntry, PaymentStatus};
    use crate::ports::CommitOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    // ════════════════════════════════════════════════════════════════════════════
    // Fixtures
    // ════════════════════════════════════════════════════════════════════════════

    fn email() -> Email {
        Email::new("a@x.com").unwrap()
    }

    async fn seed_cart(store: &InMemoryStore, n: usize) -> Vec<CartItemId> {
        let mut ids = Vec::new();
        for _ in 0..n {
            let entry = CartEntry::new(
                email(),
                MenuItemId::new(),
                "Soup",
                "soup.png",
                Money::from_cents(1250).unwrap(),
            );
            ids.push(entry.id);
            store.seed_cart_entry(entry).await;
        }
        ids
    }

    fn payment(cart_items: Vec<CartItemId>, request_id: Option<&str>) -> PaymentRecord {
        PaymentRecord {
            id: PaymentId::new(),
            email: email(),
            transaction_id: "pi_3Nabc".to_string(),
            price: Money::from_cents(2500).unwrap(),
            currency: "usd".to_string(),
            quantity: cart_items.len() as u32,
            menu_items: cart_items.iter().map(|_| MenuItemId::new()).collect(),
            cart_items,
            item_names: vec!["Soup".into(), "Soup".into()],
            status: PaymentStatus::Pending,
            date: Timestamp::now(),
            request_id: request_id.map(String::from),
        }
    }

    fn handler(store: &Arc<InMemoryStore>, notifier: &Arc<RecordingNotifier>) -> CommitPaymentHandler {
        CommitPaymentHandler::new(store.clone(), store.clone(), notifier.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Two-step path
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn persists_payment_and_removes_cart_entries() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 2).await;

        let result = handler(&store, &notifier)
            .handle(CommitPaymentCommand {
                payment: payment(ids.clone(), None),
            })
            .await
            .unwrap();

        assert_eq!(result.removed_count, 2);
        assert!(!result.replayed);
        assert_eq!(store.payments().await.len(), 1);
        for id in &ids {
            assert!(!store.has_cart_entry(id).await);
        }
    }

    #[tokio::test]
    async fn sends_confirmation_in_background() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 1).await;

        let result = handler(&store, &notifier)
            .handle(CommitPaymentCommand {
                payment: payment(ids, None),
            })
            .await
            .unwrap();

        assert!(notifier.wait_for(1, Duration::from_secs(1)).await);
        assert_eq!(notifier.attempts(), vec![result.payment_id]);
    }

    #[tokio::test]
    async fn persistence_failure_leaves_cart_untouched() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 2).await;
        store.fail_payment_saves(true);

        let err = handler(&store, &notifier)
            .handle(CommitPaymentCommand {
                payment: payment(ids.clone(), None),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OrderingError::Persistence(_)));
        assert_eq!(store.cart_len().await, 2);
        assert!(!notifier.wait_for(1, Duration::from_millis(50)).await);
    }

    #[tokio::test]
    async fn cart_failure_keeps_payment_and_reports_its_id() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 2).await;
        store.fail_cart_deletes(true);
        let record = payment(ids, None);
        let expected_id = record.id;

        let err = handler(&store, &notifier)
            .handle(CommitPaymentCommand { payment: record })
            .await
            .unwrap_err();

        match err {
            OrderingError::CartClearFailed { payment_id, .. } => assert_eq!(payment_id, expected_id),
            other => panic!("expected CartClearFailed, got {:?}", other),
        }
        assert_eq!(store.payments().await.len(), 1);
        assert_eq!(store.cart_len().await, 2);
        assert!(notifier.wait_for(1, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_commit() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::failing());
        let ids = seed_cart(&store, 1).await;

        let result = handler(&store, &notifier)
            .handle(CommitPaymentCommand {
                payment: payment(ids, None),
            })
            .await;

        assert!(result.is_ok());
        assert!(notifier.wait_for(1, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn second_commit_of_same_cart_removes_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 2).await;
        let handler = handler(&store, &notifier);

        let first = handler
            .handle(CommitPaymentCommand {
                payment: payment(ids.clone(), None),
            })
            .await
            .unwrap();
        let second = handler
            .handle(CommitPaymentCommand {
                payment: payment(ids.clone(), None),
            })
            .await
            .unwrap();

        assert_eq!(first.removed_count, 2);
        assert_eq!(second.removed_count, 0);
        assert_ne!(first.payment_id, second.payment_id);
        assert_eq!(store.payments().await.len(), 2);
    }

    #[tokio::test]
    async fn replay_with_same_request_id_is_not_persisted_twice() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ids = seed_cart(&store, 2).await;
        let handler = handler(&store, &notifier);

        let first = handler
            .handle(CommitPaymentCommand {
                payment: payment(ids.clone(), Some("checkout-42")),
            })
            .await
            .unwrap();
        let replay = handler
            .handle(CommitPaymentCommand {
                payment: payment(ids, Some("checkout-42")),
            })
            .await
            .unwrap();

        assert!(replay.replayed);
        assert_eq!(replay.payment_id, first.payment_id);
        assert_eq!(replay.removed_count, 0);
        assert_eq!(store.payments().await.len(), 1);
        assert!(notifier.wait_for(1, Duration::from_secs(1)).await);
        assert!(!notifier.wait_for(2, Duration::from_millis(50)).await);
    }

    #[tokio::test]
    async fn empty_cart_list_persists_without_delete() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        store.fail_cart_deletes(true);

        let result = handler(&store, &notifier)
            .handle(CommitPaymentCommand {
                payment: payment(vec![], None),
            })
            .await
            .unwrap();

        assert_eq!(result.removed_count, 0);
    }

    #[tokio::test]
    async fn invalid_payment_is_rejected_before_persisting() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut record = payment(vec![], None);
        record.transaction_id = String::new();

        let err = handler(&store, &notifier)
            .handle(CommitPaymentCommand { payment: record })
            .await
            .unwrap_err();

        assert!(matches!(err, OrderingError::ValidationFailed { .. }));
        assert!(store.payments().await.is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Atomic path
    // ════════════════════════════════════════════════════════════════════════════

    struct MockAtomicCommit {
        outcome: Result<CommitOutcome, DomainError>,
        calls: Mutex<Vec<PaymentId>>,
    }

    #[async_trait]
    impl AtomicPaymentCommit for MockAtomicCommit {
        async fn commit(&self, payment: &PaymentRecord) -> Result<CommitOutcome, DomainError> {
            self.calls.lock().unwrap().push(payment.id);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn atomic_commit_replaces_two_step_path() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let record = payment(vec![CartItemId::new()], None);
        let atomic = Arc::new(MockAtomicCommit {
            outcome: Ok(CommitOutcome {
                payment_id: record.id,
                removed_count: 1,
                replayed: false,
            }),
            calls: Mutex::new(Vec::new()),
        });

        let result = handler(&store, &notifier)
            .with_atomic_commit(atomic.clone())
            .handle(CommitPaymentCommand { payment: record })
            .await
            .unwrap();

        assert_eq!(result.removed_count, 1);
        assert_eq!(atomic.calls.lock().unwrap().len(), 1);
        assert!(store.payments().await.is_empty());
        assert!(notifier.wait_for(1, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn atomic_failure_is_persistence_error() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let atomic = Arc::new(MockAtomicCommit {
            outcome: Err(DomainError::database("serialization failure")),
            calls: Mutex::new(Vec::new()),
        });

        let err = handler(&store, &notifier)
            .with_atomic_commit(atomic)
            .handle(CommitPaymentCommand {
                payment: payment(vec![], None),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OrderingError::Persistence(_)));
        assert!(!notifier.wait_for(1, Duration::from_millis(50)).await);
    }
}
