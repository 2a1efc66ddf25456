pub mod p001_asset_position;
pub mod p002_asset_details;
pub mod p003_spendable_balance;
