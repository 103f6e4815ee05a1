//! Bistro Boss - Restaurant ordering backend
//!
//! Serves the menu and reviews, keeps per-user carts, takes card payments
//! through Stripe and gives admins a dashboard. Every protected route goes
//! through one authorization gate that verifies a bearer credential and,
//! where needed, the caller's stored role or identity.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
