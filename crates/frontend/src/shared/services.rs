//! Collaborator services available to every component.
//!
//! The services are `Rc` trait objects, so they are provided through a local
//! `StoredValue` instead of a plain context value.

use crate::shared::observable::use_observable;
use contracts::domain::a001_account::Account;
use contracts::domain::a002_asset::Asset;
use contracts::domain::a003_account_data::AccountData;
use contracts::domain::a004_offer::AccountOffers;
use contracts::domain::common::Network;
use contracts::shared::services::{
    AccountDataSource, AccountService, ErrorTracker, KeyGenerator, MetadataSource, MetadataState,
    Navigator,
};
use contracts::shared::stellar_toml::StellarToml;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

#[derive(Clone)]
pub struct WalletServices {
    pub accounts: Rc<dyn AccountService>,
    pub ledger: Rc<dyn AccountDataSource>,
    pub metadata: Rc<dyn MetadataSource>,
    pub keys: Rc<dyn KeyGenerator>,
    pub navigator: Rc<dyn Navigator>,
    pub errors: Rc<dyn ErrorTracker>,
}

type ServicesStore = StoredValue<WalletServices, LocalStorage>;

pub fn provide_wallet_services(services: WalletServices) {
    provide_context::<ServicesStore>(StoredValue::new_local(services));
}

pub fn use_wallet_services() -> WalletServices {
    use_context::<ServicesStore>()
        .expect("WalletServices not provided in context (provide them below the router)")
        .get_value()
}

/// Navigation usable inside event handlers and callbacks
pub fn use_navigator() -> impl Fn(&str) + Copy + Send + Sync + 'static {
    let navigator = StoredValue::new_local(use_wallet_services().navigator);
    move |path: &str| navigator.with_value(|navigator| navigator.push(path))
}

/// `Navigator` backed by the Leptos router history
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be created inside `<Router>`
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, path: &str) {
        log::debug!("navigate: {path}");
        (self.navigate)(path, NavigateOptions::default());
    }
}

pub fn use_accounts() -> ReadSignal<Vec<Account>> {
    use_observable(use_wallet_services().accounts.accounts())
}

pub fn use_account_data(public_key: &str, network: Network) -> ReadSignal<AccountData> {
    use_observable(use_wallet_services().ledger.account_data(public_key, network))
}

pub fn use_account_offers(public_key: &str, network: Network) -> ReadSignal<AccountOffers> {
    use_observable(use_wallet_services().ledger.account_offers(public_key, network))
}

pub fn use_asset_metadata(asset: &Asset, network: Network) -> ReadSignal<MetadataState> {
    use_observable(use_wallet_services().metadata.asset_metadata(asset, network))
}

pub fn use_stellar_toml(domain: &str) -> ReadSignal<Option<StellarToml>> {
    use_observable(use_wallet_services().metadata.stellar_toml(domain))
}
