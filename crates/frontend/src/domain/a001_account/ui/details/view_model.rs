use crate::shared::services::{use_account_data, use_navigator};
use contracts::domain::a001_account::Account;
use contracts::domain::a002_asset::Asset;
use contracts::domain::a003_account_data::AccountData;
use contracts::shared::decimal::{format_balance_with, BalanceFormat};
use contracts::shared::routes;
use leptos::prelude::*;

/// One line of the balances list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BalanceRow {
    pub asset: Asset,
    pub code: String,
    pub amount: String,
}

/// Native balance first, then issued assets in ledger order
pub fn balance_rows(data: &AccountData, format: BalanceFormat) -> Vec<BalanceRow> {
    let mut rows: Vec<BalanceRow> = data
        .balances
        .iter()
        .filter_map(|line| match line.asset.to_asset() {
            Ok(asset) => Some(BalanceRow {
                code: asset.code().to_string(),
                amount: format_balance_with(&line.balance, format),
                asset,
            }),
            Err(err) => {
                log::warn!("Skipping balance line of {}: {err}", data.public_key);
                None
            }
        })
        .collect();
    rows.sort_by_key(|row| !row.asset.is_native());
    rows
}

type NavigateFn = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Copy)]
pub struct AccountDetailsViewModel {
    pub account: StoredValue<Account>,
    pub data: ReadSignal<AccountData>,
    format: BalanceFormat,
    navigate: StoredValue<NavigateFn>,
}

impl AccountDetailsViewModel {
    pub fn new(account: Account, format: BalanceFormat) -> Self {
        let data = use_account_data(&account.public_key, account.network);
        let navigate = use_navigator();
        Self {
            account: StoredValue::new(account),
            data,
            format,
            navigate: StoredValue::new(Box::new(navigate) as NavigateFn),
        }
    }

    pub fn activated(&self) -> Signal<bool> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.activated))
    }

    pub fn balances(&self) -> Vec<BalanceRow> {
        let format = self.format;
        self.data.with(|data| balance_rows(data, format))
    }

    pub fn back_command(&self) {
        self.navigate(&routes::all_accounts());
    }

    pub fn open_asset_command(&self, asset: &Asset) {
        let path = self.account.with_value(|account| routes::asset_details(&account.id, asset));
        self.navigate(&path);
    }

    /// "Assets & Balances" shows the native asset first
    pub fn manage_assets_command(&self) {
        self.open_asset_command(&Asset::Native);
    }

    fn navigate(&self, path: &str) {
        self.navigate.with_value(|navigate| navigate(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_asset::{AssetType, LedgerAssetRef};
    use contracts::domain::a003_account_data::BalanceLine;

    const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";

    #[test]
    fn test_native_balance_first() {
        let usd = Asset::issued("USD", ISSUER).unwrap();
        let mut data = AccountData::unactivated("GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W");
        data.balances = vec![
            BalanceLine {
                asset: LedgerAssetRef::from(&usd),
                balance: "100.5000000".parse().unwrap(),
                buying_liabilities: Default::default(),
                selling_liabilities: Default::default(),
            },
            BalanceLine {
                asset: LedgerAssetRef::native(),
                balance: "42".parse().unwrap(),
                buying_liabilities: Default::default(),
                selling_liabilities: Default::default(),
            },
        ];
        let rows = balance_rows(&data, BalanceFormat::default());
        assert_eq!(rows[0].asset, Asset::Native);
        assert_eq!(rows[0].code, "XLM");
        assert_eq!(rows[1].code, "USD");
        assert_eq!(rows[1].amount, "100.5");
    }

    #[test]
    fn test_unsupported_lines_are_skipped() {
        let mut data = AccountData::unactivated("GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W");
        data.balances = vec![
            BalanceLine {
                asset: LedgerAssetRef {
                    asset_type: AssetType::Other,
                    asset_code: None,
                    asset_issuer: None,
                },
                balance: "5".parse().unwrap(),
                buying_liabilities: Default::default(),
                selling_liabilities: Default::default(),
            },
            BalanceLine {
                asset: LedgerAssetRef::native(),
                balance: "42".parse().unwrap(),
                buying_liabilities: Default::default(),
                selling_liabilities: Default::default(),
            },
        ];
        let rows = balance_rows(&data, BalanceFormat::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "42");
    }
}
