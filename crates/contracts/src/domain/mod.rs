pub mod a001_account;
pub mod a002_asset;
pub mod a003_account_data;
pub mod a004_offer;
pub mod common;
