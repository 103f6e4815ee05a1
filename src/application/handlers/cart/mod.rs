//! Cart handlers.

mod add_to_cart;
mod list_cart;
mod remove_cart_entry;

// Commands
pub use add_to_cart::{AddToCartCommand, AddToCartHandler};
pub use remove_cart_entry::{
    RemoveCartEntryCommand, RemoveCartEntryHandler, RemoveCartEntryResult,
};

// Queries
pub use list_cart::{ListCartHandler, ListCartQuery};
