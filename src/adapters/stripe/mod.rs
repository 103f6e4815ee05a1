//! Stripe payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Stripe PaymentIntents, plus a
//! mock used by the test suites.
//!
//! # Security
//!
//! - The secret key is handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! Configured from `payment.stripe_api_key` (sk_live_... or sk_test_...).

mod intent_types;
mod mock_payment_gateway;
mod stripe_adapter;

pub use mock_payment_gateway::MockPaymentGateway;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
