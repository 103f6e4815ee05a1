//! CreatePaymentIntentHandler - Command handler for starting a card payment.

use std::sync::Arc;

use crate::domain::foundation::Money;
use crate::domain::ordering::OrderingError;
use crate::ports::PaymentGateway;

/// Command to create a payment intent for the checkout total.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentCommand {
    pub price: Money,
    pub currency: String,
}

/// Result of creating a payment intent.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentResult {
    pub client_secret: String,
}

/// Handler for creating payment intents. Calls the gateway exactly once.
pub struct CreatePaymentIntentHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreatePaymentIntentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentIntentCommand,
    ) -> Result<CreatePaymentIntentResult, OrderingError> {
        if cmd.price.is_zero() {
            return Err(OrderingError::validation("price", "must be greater than zero"));
        }

        let intent = self
            .gateway
            .create_intent(cmd.price, &cmd.currency)
            .await
            .map_err(|e| {
                tracing::warn!(amount = cmd.price.cents(), error = %e, "Payment intent failed");
                OrderingError::from(e)
            })?;

        if intent.client_secret.is_empty() {
            return Err(OrderingError::PaymentGateway(
                "processor returned an empty client secret".to_string(),
            ));
        }

        tracing::info!(intent_id = %intent.id, amount = cmd.price.cents(), "Payment intent created");

        Ok(CreatePaymentIntentResult {
            client_secret: intent.client_secret,
        })
    }
}
