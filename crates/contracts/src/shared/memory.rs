//! In-memory collaborators.
//!
//! Back the demo mount of the frontend and the flow tests. Key derivation is
//! not modelled: an imported secret `S…` maps to the public key `G…` with the
//! same body, which is enough to keep accounts distinguishable.

use crate::domain::a001_account::{Account, AccountId, NewAccountRequest};
use crate::domain::a002_asset::Asset;
use crate::domain::a003_account_data::AccountData;
use crate::domain::a004_offer::AccountOffers;
use crate::domain::common::{is_valid_secret_key, Network};
use crate::shared::error::ServiceError;
use crate::shared::observable::Observable;
use crate::shared::services::{
    AccountDataSource, AccountService, KeyGenerator, MetadataSource, MetadataState,
};
use crate::shared::stellar_toml::StellarToml;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

type AccountKey = (String, Network);

#[derive(Default)]
pub struct InMemoryWallet {
    accounts: Observable<Vec<Account>>,
    account_data: RefCell<HashMap<AccountKey, Observable<AccountData>>>,
    offers: RefCell<HashMap<AccountKey, Observable<AccountOffers>>>,
    metadata: RefCell<HashMap<(String, Network), (Asset, Observable<MetadataState>)>>,
    tomls: RefCell<HashMap<String, Observable<Option<StellarToml>>>>,
    next_failure: RefCell<Option<ServiceError>>,
}

impl InMemoryWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_account(&self, account: Account) {
        self.accounts.update(|accounts| accounts.push(account));
    }

    pub fn set_account_data(&self, network: Network, data: AccountData) {
        self.account_data(&data.public_key, network).set(data);
        self.refresh_metadata();
    }

    pub fn set_offers(&self, public_key: &str, network: Network, offers: AccountOffers) {
        self.account_offers(public_key, network).set(offers);
    }

    pub fn set_stellar_toml(&self, domain: &str, toml: StellarToml) {
        self.stellar_toml(domain).set(Some(toml));
        self.refresh_metadata();
    }

    /// Make the next `create_account` call fail with `error`
    pub fn fail_next_creation(&self, error: ServiceError) {
        *self.next_failure.borrow_mut() = Some(error);
    }

    /// Re-resolve every handed-out metadata observable after issuer data or a TOML changed
    fn refresh_metadata(&self) {
        let entries: Vec<(Asset, Network, Observable<MetadataState>)> = self
            .metadata
            .borrow()
            .iter()
            .map(|((_, network), (asset, observable))| (asset.clone(), *network, observable.clone()))
            .collect();
        for (asset, network, observable) in entries {
            let state = self.resolve_metadata(&asset, network);
            if observable.with(|current| *current != state) {
                observable.set(state);
            }
        }
    }

    fn resolve_metadata(&self, asset: &Asset, network: Network) -> MetadataState {
        let Some(issuer) = asset.issuer() else {
            return MetadataState::default();
        };
        let issuer_data = self.account_data(issuer, network).get();
        let metadata = issuer_data.home_domain().and_then(|domain| {
            self.stellar_toml(domain)
                .with(|toml| toml.as_ref().and_then(|t| t.currency_for(asset).cloned()))
        });
        MetadataState {
            metadata,
            loading: false,
        }
    }
}

#[async_trait(?Send)]
impl AccountService for InMemoryWallet {
    fn accounts(&self) -> Observable<Vec<Account>> {
        self.accounts.clone()
    }

    async fn create_account(&self, request: NewAccountRequest) -> Result<Account, ServiceError> {
        if let Some(error) = self.next_failure.borrow_mut().take() {
            return Err(error);
        }
        if !is_valid_secret_key(&request.secret_key) {
            return Err(ServiceError::InvalidSecretKey);
        }
        let public_key = format!("G{}", &request.secret_key[1..]);
        let duplicate = self.accounts.with(|accounts| {
            accounts
                .iter()
                .any(|a| a.public_key == public_key && a.network == request.network)
        });
        if duplicate {
            return Err(ServiceError::DuplicateAccount);
        }

        let account = Account {
            id: AccountId::new_v4(),
            name: request.name,
            public_key,
            network: request.network,
            requires_password: request.password.is_some(),
        };
        self.insert_account(account.clone());
        Ok(account)
    }
}

impl AccountDataSource for InMemoryWallet {
    fn account_data(&self, public_key: &str, network: Network) -> Observable<AccountData> {
        self.account_data
            .borrow_mut()
            .entry((public_key.to_string(), network))
            .or_insert_with(|| Observable::new(AccountData::unactivated(public_key)))
            .clone()
    }

    fn account_offers(&self, public_key: &str, network: Network) -> Observable<AccountOffers> {
        self.offers
            .borrow_mut()
            .entry((public_key.to_string(), network))
            .or_default()
            .clone()
    }
}

impl MetadataSource for InMemoryWallet {
    fn asset_metadata(&self, asset: &Asset, network: Network) -> Observable<MetadataState> {
        let key = (asset.id(), network);
        if let Some((_, existing)) = self.metadata.borrow().get(&key) {
            return existing.clone();
        }
        let observable = Observable::new(self.resolve_metadata(asset, network));
        self.metadata
            .borrow_mut()
            .insert(key, (asset.clone(), observable.clone()));
        observable
    }

    fn stellar_toml(&self, domain: &str) -> Observable<Option<StellarToml>> {
        self.tomls
            .borrow_mut()
            .entry(domain.to_string())
            .or_default()
            .clone()
    }
}

impl KeyGenerator for InMemoryWallet {
    fn generate_secret_key(&self) -> String {
        let bytes: Vec<u8> = (0..3)
            .flat_map(|_| *uuid::Uuid::new_v4().as_bytes())
            .collect();
        let mut key = String::from("S");
        key.push_str(&base32(&bytes)[..55]);
        key
    }
}

fn base32(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8 / 5 + 1);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for &byte in bytes {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}
