//! Mock payment gateway for testing.
//!
//! Records every requested amount and returns a synthetic client secret,
//! or a configured error.
//!
//! ```ignore
//! let mock = MockPaymentGateway::new();
//! mock.fail_with(PaymentError::card_declined("Test decline"));
//! assert_eq!(mock.calls()[0].0.cents(), 2500);
//! ```

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::Money;
use crate::ports::{PaymentError, PaymentGateway, PaymentIntent};

/// Mock payment gateway.
#[derive(Default)]
pub struct MockPaymentGateway {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    calls: Vec<(Money, String)>,
    error: Option<PaymentError>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail with `error`.
    pub fn fail_with(&self, error: PaymentError) {
        if let Ok(mut state) = self.state.lock() {
            state.error = Some(error);
        }
    }

    /// Returns `(amount, currency)` for every call so far.
    pub fn calls(&self) -> Vec<(Money, String)> {
        self.state
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(
        &self,
        amount: Money,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| PaymentError::network("mock gateway lock poisoned"))?;
        state.calls.push((amount, currency.to_string()));

        if let Some(err) = &state.error {
            return Err(err.clone());
        }

        let id = format!("pi_mock_{}", state.calls.len());
        Ok(PaymentIntent {
            client_secret: format!("{}_secret_{}", id, uuid::Uuid::new_v4().simple()),
            id,
            amount,
        })
    }
}
