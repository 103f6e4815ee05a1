//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `access` - Roles and access requirements for the authorization gate
//! - `ordering` - Users, catalog, carts, payments, and reporting

pub mod access;
pub mod foundation;
pub mod ordering;
