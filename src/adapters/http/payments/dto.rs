//! DTOs for payment endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::dto::{DeleteResult, InsertResult};
use crate::domain::foundation::{CartItemId, Email, MenuItemId, Money, PaymentId, Timestamp};
use crate::domain::ordering::{PaymentRecord, PaymentStatus};

/// Body of `POST /create-payment-intent`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: Money,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

/// Body of `POST /payments`, as posted by the checkout page.
///
/// `email` defaults to the caller. `requestId` makes the call safe to retry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPaymentRequest {
    #[serde(default)]
    pub email: Option<Email>,
    pub transaction_id: String,
    pub price: Money,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub cart_items: Vec<CartItemId>,
    #[serde(default)]
    pub menu_items: Vec<MenuItemId>,
    #[serde(default)]
    pub item_names: Vec<String>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl CommitPaymentRequest {
    /// Builds the record to store, filling defaults for omitted fields.
    pub fn into_record(self, payer: Email, default_currency: &str) -> PaymentRecord {
        let quantity = self
            .quantity
            .unwrap_or_else(|| u32::try_from(self.cart_items.len()).unwrap_or(u32::MAX));

        PaymentRecord {
            id: PaymentId::new(),
            email: payer,
            transaction_id: self.transaction_id,
            price: self.price,
            currency: self
                .currency
                .unwrap_or_else(|| default_currency.to_string())
                .to_lowercase(),
            quantity,
            cart_items: self.cart_items,
            menu_items: self.menu_items,
            item_names: self.item_names,
            status: self.status,
            date: self.date.unwrap_or_else(Timestamp::now),
            request_id: self.request_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPaymentResponse {
    pub insert_result: InsertResult,
    pub delete_result: DeleteResult,
}
