mod backup;
mod handoff;
mod import;
mod view;
mod view_model;

pub use handoff::SecretKeyHandoff;
pub use import::{accept_imported_key, ImportKeyDialog};
pub use view::CreateAccountPage;
pub use view_model::{
    create_flow, parse_create_account_query, CreateAccountQuery, CreateAccountViewModel,
};
