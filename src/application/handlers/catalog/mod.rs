//! Catalog handlers for the menu and reviews.

mod add_menu_item;
mod delete_menu_item;
mod list_menu;
mod list_reviews;

// Commands
pub use add_menu_item::{AddMenuItemCommand, AddMenuItemHandler};
pub use delete_menu_item::{DeleteMenuItemCommand, DeleteMenuItemHandler, DeleteMenuItemResult};

// Queries
pub use list_menu::{ListMenuHandler, ListMenuQuery};
pub use list_reviews::{ListReviewsHandler, ListReviewsQuery};
