//! Account page: balances, context menu and the nested asset dialog route
//!
//! - view_model.rs: balance rows and navigation commands
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::{use_route_account, AccountPage};
pub use view_model::{balance_rows, AccountDetailsViewModel, BalanceRow};
