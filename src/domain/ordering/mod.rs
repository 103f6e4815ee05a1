//! Ordering domain module.
//!
//! Users, catalog, carts, payments, and the read-only reporting model.
//!
//! # Module Structure
//!
//! - `user` - Stored user record with role
//! - `catalog` - Menu items and reviews
//! - `cart` - Cart entries owned by a user
//! - `payment` - Append-only payment records
//! - `stats` - Admin dashboard aggregations
//! - `errors` - Ordering error taxonomy

mod cart;
mod catalog;
mod errors;
mod payment;
mod stats;
mod user;

pub use cart::CartEntry;
pub use catalog::{MenuItem, Review};
pub use errors::OrderingError;
pub use payment::{PaymentRecord, PaymentStatus};
pub use stats::{AdminStats, CategoryStats, OrderStats};
pub use user::User;
