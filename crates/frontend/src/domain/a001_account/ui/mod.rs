pub mod account_name;
pub mod context_menu;
pub mod details;
pub mod list;
pub mod selection_list;
