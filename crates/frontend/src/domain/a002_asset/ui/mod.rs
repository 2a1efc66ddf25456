pub mod details;
pub mod logo;
pub mod spendable_balance;
