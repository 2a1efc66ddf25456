//! Route paths shared by the navigation flow and the router.

use crate::domain::a001_account::AccountId;
use crate::domain::a002_asset::Asset;
use crate::domain::common::AggregateId;

pub const ALL_ACCOUNTS: &str = "/";
pub const CREATE_ACCOUNT: &str = "/accounts/new";

pub fn all_accounts() -> String {
    ALL_ACCOUNTS.to_string()
}

pub fn create_account(testnet: bool) -> String {
    format!("{CREATE_ACCOUNT}?testnet={testnet}")
}

pub fn account(id: &AccountId) -> String {
    format!("/account/{}", id.as_string())
}

pub fn asset_details(id: &AccountId, asset: &Asset) -> String {
    format!("/account/{}/assets/{}", id.as_string(), asset.id())
}
