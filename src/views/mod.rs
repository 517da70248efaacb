//! Screen state: pagination, list/detail controllers, the cart screen and
//! the dashboard section switches.

pub mod cart;
pub mod dashboard;
pub mod list;
pub mod pager;
pub mod sources;
