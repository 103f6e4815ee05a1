//! Stripe API response shapes used by the payment gateway adapter.

use serde::Deserialize;

/// The subset of a Stripe PaymentIntent object we read.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub client_secret: Option<String>,
}

/// Error envelope returned by the Stripe API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payment_intent() {
        let json = r#"{
            "id": "pi_3NtestABC",
            "object": "payment_intent",
            "amount": 2500,
            "currency": "usd",
            "status": "requires_payment_method",
            "client_secret": "pi_3NtestABC_secret_xyz",
            "payment_method_types": ["card"]
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_3NtestABC");
        assert_eq!(intent.amount, 2500);
        assert_eq!(intent.client_secret.as_deref(), Some("pi_3NtestABC_secret_xyz"));
    }
}
