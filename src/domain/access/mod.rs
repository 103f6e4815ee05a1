//! Access control domain module.
//!
//! Pure decision logic for the authorization gate. The gate itself lives in
//! the application layer; everything here is side-effect free.
//!
//! # Module Structure
//!
//! - `role` - Access tier stored on a user record
//! - `requirement` - What an operation demands of its caller

mod requirement;
mod role;

pub use requirement::AccessRequirement;
pub use role::Role;
