pub mod context_menu;
pub mod dialog_frame;
pub mod expandable_card;
pub mod main_title;
pub mod read_only_field;
