//! Catalog repository port for menu items and reviews.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MenuItemId};
use crate::domain::ordering::{MenuItem, Review};

/// Repository port for the public catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List the whole menu.
    async fn list_menu(&self) -> Result<Vec<MenuItem>, DomainError>;

    /// Add an item to the menu.
    async fn add_menu_item(&self, item: &MenuItem) -> Result<(), DomainError>;

    /// Remove an item from the menu.
    ///
    /// Returns `false` if no item has this id.
    async fn delete_menu_item(&self, id: &MenuItemId) -> Result<bool, DomainError>;

    /// List all reviews.
    async fn list_reviews(&self) -> Result<Vec<Review>, DomainError>;
}
