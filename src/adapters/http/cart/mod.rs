//! HTTP adapter for carts. Every route is authenticated and scoped to the
//! caller's own identity.
//!
//! - `POST /cart` - Add an entry to the caller's cart
//! - `GET /carts?email=` - List the caller's cart
//! - `DELETE /carts/:id` - Remove one of the caller's entries

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::cart_routes;
