//! Cart entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartItemId, Email, MenuItemId, Money};

/// A menu item a user has placed in their cart.
///
/// Entries are owned by `email` and removed individually by the owner or
/// in bulk when a payment referencing them is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: CartItemId,
    pub email: Email,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub image: String,
    pub price: Money,
}

impl CartEntry {
    pub fn new(
        email: Email,
        menu_item_id: MenuItemId,
        name: impl Into<String>,
        image: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: CartItemId::new(),
            email,
            menu_item_id,
            name: name.into(),
            image: image.into(),
            price,
        }
    }

    pub fn is_owned_by(&self, email: &Email) -> bool {
        &self.email == email
    }
}
