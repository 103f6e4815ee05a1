//! Admin dashboard query handlers.

mod get_admin_stats;
mod get_order_stats;

pub use get_admin_stats::{GetAdminStatsHandler, GetAdminStatsQuery};
pub use get_order_stats::{GetOrderStatsHandler, GetOrderStatsQuery};
