//! DTOs for cart endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Email, MenuItemId, Money};
use crate::domain::ordering::CartEntry;

/// Body of `POST /cart`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub email: Email,
    pub menu_item_id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: Money,
}

/// Query of `GET /carts`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub menu_item_id: String,
    pub name: String,
    pub image: String,
    pub price: Money,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            email: entry.email.into(),
            menu_item_id: entry.menu_item_id.to_string(),
            name: entry.name,
            image: entry.image,
            price: entry.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_reads_camel_case() {
        let id = MenuItemId::new();
        let body = serde_json::json!({
            "email": "a@x.com",
            "menuItemId": id.to_string(),
            "name": "Soup",
            "price": 8.5
        });
        let request: AddToCartRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.menu_item_id, id);
        assert_eq!(request.price.cents(), 850);
        assert!(request.image.is_empty());
    }
}
