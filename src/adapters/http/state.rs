//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use crate::application::handlers::auth::IssueTokenHandler;
use crate::application::handlers::cart::{
    AddToCartHandler, ListCartHandler, RemoveCartEntryHandler,
};
use crate::application::handlers::catalog::{
    AddMenuItemHandler, DeleteMenuItemHandler, ListMenuHandler, ListReviewsHandler,
};
use crate::application::handlers::payment::{CommitPaymentHandler, CreatePaymentIntentHandler};
use crate::application::handlers::stats::{GetAdminStatsHandler, GetOrderStatsHandler};
use crate::application::handlers::users::{
    CheckAdminHandler, ListUsersHandler, PromoteToAdminHandler, RegisterUserHandler,
};
use crate::application::AuthorizationGate;
use crate::ports::{
    AtomicPaymentCommit, CartRepository, CatalogRepository, PaymentGateway, PaymentNotifier,
    PaymentRepository, StatsReader, TokenCodec, UserRepository,
};

pub const DEFAULT_CURRENCY: &str = "usd";

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AuthorizationGate>,
    pub token_codec: Arc<dyn TokenCodec>,
    pub users: Arc<dyn UserRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub atomic_commit: Option<Arc<dyn AtomicPaymentCommit>>,
    pub stats: Arc<dyn StatsReader>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub notifier: Arc<dyn PaymentNotifier>,
    pub currency: String,
}

impl AppState {
    /// Builds the state from a single store that backs every store port.
    pub fn from_store<S>(
        token_codec: Arc<dyn TokenCodec>,
        store: Arc<S>,
        payment_gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn PaymentNotifier>,
    ) -> Self
    where
        S: UserRepository
            + CatalogRepository
            + CartRepository
            + PaymentRepository
            + StatsReader
            + 'static,
    {
        let users: Arc<dyn UserRepository> = store.clone();
        Self {
            gate: Arc::new(AuthorizationGate::new(token_codec.clone(), users.clone())),
            token_codec,
            users,
            catalog: store.clone(),
            carts: store.clone(),
            payments: store.clone(),
            atomic_commit: None,
            stats: store,
            payment_gateway,
            notifier,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_atomic_commit(mut self, atomic: Arc<dyn AtomicPaymentCommit>) -> Self {
        self.atomic_commit = Some(atomic);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    // Handlers are cheap to build; they only clone `Arc`s.

    pub fn issue_token_handler(&self) -> IssueTokenHandler {
        IssueTokenHandler::new(self.token_codec.clone())
    }

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone())
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn check_admin_handler(&self) -> CheckAdminHandler {
        CheckAdminHandler::new(self.users.clone())
    }

    pub fn promote_to_admin_handler(&self) -> PromoteToAdminHandler {
        PromoteToAdminHandler::new(self.users.clone())
    }

    pub fn list_menu_handler(&self) -> ListMenuHandler {
        ListMenuHandler::new(self.catalog.clone())
    }

    pub fn add_menu_item_handler(&self) -> AddMenuItemHandler {
        AddMenuItemHandler::new(self.catalog.clone())
    }

    pub fn delete_menu_item_handler(&self) -> DeleteMenuItemHandler {
        DeleteMenuItemHandler::new(self.catalog.clone())
    }

    pub fn list_reviews_handler(&self) -> ListReviewsHandler {
        ListReviewsHandler::new(self.catalog.clone())
    }

    pub fn add_to_cart_handler(&self) -> AddToCartHandler {
        AddToCartHandler::new(self.carts.clone())
    }

    pub fn list_cart_handler(&self) -> ListCartHandler {
        ListCartHandler::new(self.carts.clone())
    }

    pub fn remove_cart_entry_handler(&self) -> RemoveCartEntryHandler {
        RemoveCartEntryHandler::new(self.carts.clone())
    }

    pub fn create_payment_intent_handler(&self) -> CreatePaymentIntentHandler {
        CreatePaymentIntentHandler::new(self.payment_gateway.clone())
    }

    pub fn commit_payment_handler(&self) -> CommitPaymentHandler {
        let handler = CommitPaymentHandler::new(
            self.payments.clone(),
            self.carts.clone(),
            self.notifier.clone(),
        );
        match &self.atomic_commit {
            Some(atomic) => handler.with_atomic_commit(atomic.clone()),
            None => handler,
        }
    }

    pub fn admin_stats_handler(&self) -> GetAdminStatsHandler {
        GetAdminStatsHandler::new(self.stats.clone())
    }

    pub fn order_stats_handler(&self) -> GetOrderStatsHandler {
        GetOrderStatsHandler::new(self.stats.clone())
    }
}
