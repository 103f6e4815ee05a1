//! Cart repository port.
//!
//! # Idempotency
//!
//! `delete_many` must treat ids that no longer exist as no-ops. Two commits
//! referencing the same entries can both succeed; the second simply
//! removes nothing.

use async_trait::async_trait;

use crate::domain::foundation::{CartItemId, DomainError, Email};
use crate::domain::ordering::CartEntry;

/// Repository port for cart entries.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Add an entry to its owner's cart.
    async fn add(&self, entry: &CartEntry) -> Result<(), DomainError>;

    /// List the entries owned by `email`.
    async fn list_by_owner(&self, email: &Email) -> Result<Vec<CartEntry>, DomainError>;

    /// Remove one entry, only if it belongs to `owner`.
    ///
    /// Returns `false` if no such entry exists for this owner.
    async fn delete_owned(&self, id: &CartItemId, owner: &Email) -> Result<bool, DomainError>;

    /// Remove every entry whose id is in `ids`.
    ///
    /// Returns the number of entries actually removed.
    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError>;
}
