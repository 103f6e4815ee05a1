//! AddToCartHandler - Command handler for adding a menu item to a cart.

use std::sync::Arc;

use crate::domain::foundation::{Email, MenuItemId, Money};
use crate::domain::ordering::{CartEntry, OrderingError};
use crate::ports::CartRepository;

/// Command to add an item to `email`'s cart. The caller has been checked
/// against `email` already.
#[derive(Debug, Clone)]
pub struct AddToCartCommand {
    pub email: Email,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub image: String,
    pub price: Money,
}

pub struct AddToCartHandler {
    carts: Arc<dyn CartRepository>,
}

impl AddToCartHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, cmd: AddToCartCommand) -> Result<CartEntry, OrderingError> {
        let entry = CartEntry::new(cmd.email, cmd.menu_item_id, cmd.name, cmd.image, cmd.price);
        self.carts.add(&entry).await?;
        Ok(entry)
    }
}
