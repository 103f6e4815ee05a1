//! User handlers.
//!
//! ## Commands
//! - Registering a user on first contact
//! - Promoting a user to admin
//!
//! ## Queries
//! - Checking the caller's admin status
//! - Listing users (admin)

mod check_admin;
mod list_users;
mod promote_to_admin;
mod register_user;

// Commands
pub use promote_to_admin::{PromoteToAdminCommand, PromoteToAdminHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};

// Queries
pub use check_admin::{CheckAdminHandler, CheckAdminQuery};
pub use list_users::{ListUsersHandler, ListUsersQuery};
