//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Credential Ports
//!
//! - `TokenCodec` - Signs and verifies bearer credentials
//!
//! ## Store Ports
//!
//! - `UserRepository` - User records keyed by email
//! - `CatalogRepository` - Menu items and reviews
//! - `CartRepository` - Cart entries, idempotent bulk delete
//! - `PaymentRepository` - Append-only payments with replay detection
//! - `AtomicPaymentCommit` - Transactional payment + cart retirement
//! - `StatsReader` - Dashboard aggregations
//!
//! ## Outbound Ports
//!
//! - `PaymentGateway` - Card processor payment intents
//! - `PaymentNotifier` - Payment confirmation delivery

mod atomic_payment_commit;
mod cart_repository;
mod catalog_repository;
mod payment_gateway;
mod payment_notifier;
mod payment_repository;
mod stats_reader;
mod token_codec;
mod user_repository;

pub use atomic_payment_commit::{AtomicPaymentCommit, CommitOutcome};
pub use cart_repository::CartRepository;
pub use catalog_repository::CatalogRepository;
pub use payment_gateway::{PaymentError, PaymentErrorCode, PaymentGateway, PaymentIntent};
pub use payment_notifier::{NotificationError, PaymentNotifier};
pub use payment_repository::{PaymentRepository, SaveResult};
pub use stats_reader::StatsReader;
pub use token_codec::{IssuedToken, TokenCodec};
pub use user_repository::UserRepository;
