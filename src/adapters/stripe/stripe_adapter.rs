//! Stripe payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Stripe PaymentIntents API.
//!
//! # Security
//!
//! - The secret key is held in `secrecy::SecretString` and only exposed to
//!   build the basic-auth header
//! - Intents are restricted to `card` payment methods
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::Money;
use crate::ports::{PaymentError, PaymentErrorCode, PaymentGateway, PaymentIntent};

use super::intent_types::{StripeErrorResponse, StripePaymentIntent};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment gateway adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Form parameters for a card-only payment intent.
    fn intent_params(amount: Money, currency: &str) -> Vec<(&'static str, String)> {
        vec![
            ("amount", amount.cents().to_string()),
            ("currency", currency.to_lowercase()),
            ("payment_method_types[]", "card".to_string()),
        ]
    }

    /// Translate a Stripe error response into a `PaymentError`.
    fn map_error(status: reqwest::StatusCode, body: &str) -> PaymentError {
        let parsed = serde_json::from_str::<StripeErrorResponse>(body).ok();
        let detail = parsed.as_ref().map(|r| &r.error);

        let message = detail
            .and_then(|d| d.message.clone())
            .unwrap_or_else(|| format!("Stripe API error ({})", status));

        let code = match (status.as_u16(), detail) {
            (401, _) => PaymentErrorCode::AuthenticationError,
            (429, _) => PaymentErrorCode::RateLimitExceeded,
            (_, Some(d)) if d.error_type == "card_error" => {
                match (d.code.as_deref(), d.decline_code.as_deref()) {
                    (Some("expired_card"), _) => PaymentErrorCode::CardExpired,
                    (_, Some("insufficient_funds")) => PaymentErrorCode::InsufficientFunds,
                    _ => PaymentErrorCode::CardDeclined,
                }
            }
            (_, Some(d)) if d.error_type == "invalid_request_error" => {
                PaymentErrorCode::InvalidRequest
            }
            _ => PaymentErrorCode::ProviderError,
        };

        let err = PaymentError::new(code, message);
        match detail.and_then(|d| d.code.clone()) {
            Some(provider_code) => err.with_provider_code(provider_code),
            None => err,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripePaymentAdapter {
    async fn create_intent(
        &self,
        amount: Money,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&Self::intent_params(amount, currency))
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let err = Self::map_error(status, &error_text);
            tracing::error!(status = %status, code = %err.code, "Stripe create_payment_intent failed");
            return Err(err);
        }

        let intent: StripePaymentIntent = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        tracing::debug!(
            intent_id = %intent.id,
            status = %intent.status,
            currency = %intent.currency,
            "Stripe payment intent created"
        );

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                "Stripe response carried no client_secret",
            )
        })?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: Money::from_cents(intent.amount).unwrap_or(amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn intent_params_use_minor_units_and_card_only() {
        let params =
            StripePaymentAdapter::intent_params(Money::from_major(25.0).unwrap(), "USD");
        assert_eq!(
            params,
            vec![
                ("amount", "2500".to_string()),
                ("currency", "usd".to_string()),
                ("payment_method_types[]", "card".to_string()),
            ]
        );
    }

    #[test]
    fn card_error_maps_to_declined() {
        let body = r#"{
            "error": {
                "type": "card_error",
                "code": "card_declined",
                "decline_code": "generic_decline",
                "message": "Your card was declined."
            }
        }"#;
        let err = StripePaymentAdapter::map_error(StatusCode::PAYMENT_REQUIRED, body);
        assert_eq!(err.code, PaymentErrorCode::CardDeclined);
        assert_eq!(err.message, "Your card was declined.");
        assert_eq!(err.provider_code.as_deref(), Some("card_declined"));
        assert!(err.is_decline());
    }

    #[test]
    fn insufficient_funds_is_recognized() {
        let body = r#"{"error": {"type": "card_error", "code": "card_declined", "decline_code": "insufficient_funds"}}"#;
        let err = StripePaymentAdapter::map_error(StatusCode::PAYMENT_REQUIRED, body);
        assert_eq!(err.code, PaymentErrorCode::InsufficientFunds);
    }

    #[test]
    fn expired_card_is_recognized() {
        let body = r#"{"error": {"type": "card_error", "code": "expired_card"}}"#;
        let err = StripePaymentAdapter::map_error(StatusCode::PAYMENT_REQUIRED, body);
        assert_eq!(err.code, PaymentErrorCode::CardExpired);
    }

    #[test]
    fn bad_key_maps_to_authentication_error() {
        let body = r#"{"error": {"type": "invalid_request_error", "message": "Invalid API Key provided"}}"#;
        let err = StripePaymentAdapter::map_error(StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert!(!err.is_decline());
    }

    #[test]
    fn invalid_request_is_recognized() {
        let body = r#"{"error": {"type": "invalid_request_error", "code": "amount_too_small", "message": "Amount must be at least 50 cents"}}"#;
        let err = StripePaymentAdapter::map_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.code, PaymentErrorCode::InvalidRequest);
    }

    #[test]
    fn unparseable_body_is_provider_error() {
        let err = StripePaymentAdapter::map_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.code, PaymentErrorCode::ProviderError);
        assert!(err.message.contains("502"));
    }
}
