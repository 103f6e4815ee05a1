//! Payment records.
//!
//! A payment is appended once the client has confirmed the charge with the
//! processor. Records are never updated; the cart entries they reference
//! must not exist after a successful commit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CartItemId, Email, MenuItemId, Money, PaymentId, Timestamp, ValidationError,
};

/// Longest accepted client-supplied idempotency key.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Lifecycle status reported by the client when recording a payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Succeeded,
    Delivered,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Delivered => "delivered",
        }
    }

    /// Parses the stored representation. Unknown values read as `Pending`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "succeeded" => PaymentStatus::Succeeded,
            "delivered" => PaymentStatus::Delivered,
            _ => PaymentStatus::Pending,
        }
    }
}

/// A completed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub email: Email,
    pub transaction_id: String,
    pub price: Money,
    pub currency: String,
    pub quantity: u32,
    pub cart_items: Vec<CartItemId>,
    pub menu_items: Vec<MenuItemId>,
    pub item_names: Vec<String>,
    pub status: PaymentStatus,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl PaymentRecord {
    /// Checks the fields a client could get wrong.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.transaction_id.trim().is_empty() {
            return Err(ValidationError::empty_field("transactionId"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "must be a three-letter ISO code",
            ));
        }
        if let Some(key) = &self.request_id {
            if key.trim().is_empty() {
                return Err(ValidationError::empty_field("requestId"));
            }
            if key.len() > MAX_REQUEST_ID_LEN {
                return Err(ValidationError::out_of_range(
                    "requestId",
                    1,
                    MAX_REQUEST_ID_LEN as i64,
                    key.len() as i64,
                ));
            }
        }
        Ok(())
    }

    /// Cart entries this payment retires, without duplicates.
    pub fn distinct_cart_items(&self) -> Vec<CartItemId> {
        let mut ids = self.cart_items.clone();
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> PaymentRecord {
        PaymentRecord {
            id: PaymentId::new(),
            email: Email::new("a@x.com").unwrap(),
            transaction_id: "pi_123".to_string(),
            price: Money::from_cents(2500).unwrap(),
            currency: "usd".to_string(),
            quantity: 2,
            cart_items: vec![CartItemId::new(), CartItemId::new()],
            menu_items: vec![MenuItemId::new(), MenuItemId::new()],
            item_names: vec!["Soup".into(), "Salad".into()],
            status: PaymentStatus::Pending,
            date: Timestamp::now(),
            request_id: None,
        }
    }

    #[test]
    fn valid_payment_passes() {
        assert!(payment().validate().is_ok());
    }

    #[test]
    fn blank_transaction_id_is_rejected() {
        let mut p = payment();
        p.transaction_id = "  ".into();
        assert_eq!(
            p.validate(),
            Err(ValidationError::empty_field("transactionId"))
        );
    }

    #[test]
    fn bad_currency_is_rejected() {
        let mut p = payment();
        p.currency = "dollars".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn oversized_request_id_is_rejected() {
        let mut p = payment();
        p.request_id = Some("k".repeat(129));
        assert!(p.validate().is_err());
        p.request_id = Some("k".repeat(128));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn distinct_cart_items_drops_duplicates() {
        let mut p = payment();
        let dup = p.cart_items[0];
        p.cart_items.push(dup);
        assert_eq!(p.distinct_cart_items().len(), 2);
    }

    #[test]
    fn serializes_wire_field_names() {
        let mut p = payment();
        p.request_id = Some("req-1".into());
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("transactionId").is_some());
        assert!(json.get("cartItems").is_some());
        assert!(json.get("menuItems").is_some());
        assert!(json.get("itemNames").is_some());
        assert_eq!(json["requestId"], "req-1");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["price"], serde_json::json!(25.0));
    }

    #[test]
    fn status_round_trips_through_storage() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Succeeded,
            PaymentStatus::Delivered,
        ] {
            assert_eq!(PaymentStatus::from_stored(status.as_str()), status);
        }
    }
}
