//! Payment handlers.
//!
//! ## Commands
//! - Creating a payment intent with the card processor
//! - Committing a completed payment and retiring its cart

mod commit_payment;
mod create_payment_intent;

pub use commit_payment::{CommitPaymentCommand, CommitPaymentHandler, CommitPaymentResult};
pub use create_payment_intent::{
    CreatePaymentIntentCommand, CreatePaymentIntentHandler, CreatePaymentIntentResult,
};
