//! Interfaces of the external collaborators this layer consumes.
//!
//! Implementations live outside the crate (browser adapters, wallet storage,
//! ledger subscriptions); `shared::memory` provides in-memory ones.

use crate::domain::a001_account::{Account, NewAccountRequest};
use crate::domain::a002_asset::Asset;
use crate::domain::a003_account_data::AccountData;
use crate::domain::a004_offer::AccountOffers;
use crate::domain::common::Network;
use crate::shared::error::ServiceError;
use crate::shared::observable::Observable;
use crate::shared::stellar_toml::{CurrencyMetadata, StellarToml};
use async_trait::async_trait;

/// Account list and account creation
#[async_trait(?Send)]
pub trait AccountService {
    fn accounts(&self) -> Observable<Vec<Account>>;

    async fn create_account(&self, request: NewAccountRequest) -> Result<Account, ServiceError>;
}

/// Live ledger data per account
pub trait AccountDataSource {
    /// Always holds a snapshot; unknown accounts start as unactivated
    fn account_data(&self, public_key: &str, network: Network) -> Observable<AccountData>;

    fn account_offers(&self, public_key: &str, network: Network) -> Observable<AccountOffers>;
}

/// Result of an asset metadata lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataState {
    pub metadata: Option<CurrencyMetadata>,
    pub loading: bool,
}

/// TOML-backed metadata resolution
pub trait MetadataSource {
    fn asset_metadata(&self, asset: &Asset, network: Network) -> Observable<MetadataState>;

    fn stellar_toml(&self, domain: &str) -> Observable<Option<StellarToml>>;
}

pub trait KeyGenerator {
    /// Fresh random secret key (strkey encoded)
    fn generate_secret_key(&self) -> String;
}

/// Router history, fire-and-forget
pub trait Navigator {
    fn push(&self, path: &str);
}

/// Process-wide error sink, fire-and-forget
pub trait ErrorTracker {
    fn track_error(&self, error: &ServiceError);
}
