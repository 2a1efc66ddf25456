//! Asset details dialog
//!
//! - view_model.rs: title, subtitle and logo derived from metadata
//! - panels.rs: account balance, asset and issuer panels
//! - view.rs: the dialog and its route

mod panels;
mod view;
mod view_model;

pub use panels::{AccountRelatedData, AssetDetails, LumenDetails};
pub use view::{AssetDetailsDialog, AssetDetailsRoute};
pub use view_model::{dialog_subtitle, AssetDetailsViewModel};
