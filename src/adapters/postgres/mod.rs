//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresUserRepository` - User records, unique by email
//! - `PostgresCatalogRepository` - Menu items and reviews
//! - `PostgresCartRepository` - Cart entries
//! - `PostgresPaymentRepository` - Append-only payments keyed by request id
//! - `PostgresPaymentLedger` - Payment insert and cart delete in one transaction
//! - `PostgresStatsReader` - Dashboard aggregations in SQL

mod cart_repository;
mod catalog_repository;
mod payment_ledger;
mod payment_repository;
mod stats_reader;
mod user_repository;

pub use cart_repository::PostgresCartRepository;
pub use catalog_repository::PostgresCatalogRepository;
pub use payment_ledger::PostgresPaymentLedger;
pub use payment_repository::PostgresPaymentRepository;
pub use stats_reader::PostgresStatsReader;
pub use user_repository::PostgresUserRepository;
