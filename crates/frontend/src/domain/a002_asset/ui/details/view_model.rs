use crate::domain::a001_account::ui::account_name::account_label;
use crate::shared::services::{use_accounts, use_asset_metadata};
use contracts::domain::a001_account::Account;
use contracts::domain::a002_asset::Asset;
use contracts::domain::common::Network;
use contracts::projections::p002_asset_details::{asset_title, LUMEN_DOMAIN};
use contracts::shared::services::MetadataState;
use contracts::shared::stellar_toml::{non_empty, CurrencyMetadata};
use leptos::prelude::*;

/// `stellar.org` for lumens, otherwise the issuer's account name
pub fn dialog_subtitle(asset: &Asset, accounts: &[Account], network: Network) -> String {
    match asset.issuer() {
        None => LUMEN_DOMAIN.to_string(),
        Some(issuer) => account_label(accounts, issuer, network),
    }
}

#[derive(Clone, Copy)]
pub struct AssetDetailsViewModel {
    pub account: StoredValue<Account>,
    pub asset: StoredValue<Asset>,
    pub metadata: ReadSignal<MetadataState>,
    accounts: ReadSignal<Vec<Account>>,
}

impl AssetDetailsViewModel {
    pub fn new(account: Account, asset: Asset) -> Self {
        let metadata = use_asset_metadata(&asset, account.network);
        Self {
            account: StoredValue::new(account),
            asset: StoredValue::new(asset),
            metadata,
            accounts: use_accounts(),
        }
    }

    pub fn currency(&self) -> Option<CurrencyMetadata> {
        self.metadata.with(|state| state.metadata.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.metadata.with(|state| state.loading)
    }

    pub fn title(&self) -> String {
        self.asset
            .with_value(|asset| self.metadata.with(|state| asset_title(asset, state.metadata.as_ref())))
    }

    pub fn subtitle(&self) -> String {
        let network = self.account.with_value(|account| account.network);
        self.asset.with_value(|asset| {
            self.accounts
                .with(|accounts| dialog_subtitle(asset, accounts, network))
        })
    }

    pub fn logo_url(&self) -> Option<String> {
        self.metadata.with(|state| {
            state
                .metadata
                .as_ref()
                .and_then(|m| non_empty(&m.image))
                .map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_account::AccountId;
    use contracts::domain::common::shorten_public_key;
    use uuid::Uuid;

    const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";

    #[test]
    fn test_dialog_subtitle() {
        let usd = Asset::issued("USD", ISSUER).unwrap();
        let issuer_account = Account {
            id: AccountId(Uuid::nil()),
            name: "My Testnet Account #2".into(),
            public_key: ISSUER.into(),
            network: Network::Testnet,
            requires_password: false,
        };

        assert_eq!(dialog_subtitle(&Asset::Native, &[], Network::Mainnet), "stellar.org");
        assert_eq!(
            dialog_subtitle(&usd, &[issuer_account.clone()], Network::Testnet),
            "My Testnet Account #2"
        );
        assert_eq!(
            dialog_subtitle(&usd, &[issuer_account], Network::Mainnet),
            shorten_public_key(ISSUER)
        );
    }
}
