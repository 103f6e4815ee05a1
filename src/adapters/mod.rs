//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT bearer credentials
//! - `email` - Payment confirmation delivery (Mailgun, recorder)
//! - `http` - axum REST API and the authorization gate middleware
//! - `memory` - In-memory store for tests and local runs
//! - `postgres` - PostgreSQL store
//! - `stripe` - Stripe payment intents

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod stripe;
