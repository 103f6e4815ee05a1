//! HTTP adapter for the menu and reviews.
//!
//! - `GET /menu`, `GET /reviews` - Public listings
//! - `POST /menu`, `DELETE /menu/:id` - Menu management (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{catalog_admin_routes, catalog_public_routes};
