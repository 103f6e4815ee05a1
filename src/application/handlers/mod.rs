//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod payment;
pub mod stats;
pub mod users;
