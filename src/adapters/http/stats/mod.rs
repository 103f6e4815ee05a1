//! HTTP adapter for the admin dashboard. Mounted behind `require_admin`.
//!
//! - `GET /admin-stats` - Headline counts and revenue
//! - `GET /order-stats` - Orders and revenue per menu category

pub mod handlers;
pub mod routes;

pub use routes::stats_routes;
