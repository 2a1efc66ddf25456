use crate::shared::observable::use_observable;
use crate::shared::services::{use_wallet_services, WalletServices};
use contracts::domain::common::Network;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_create_account::{
    AccountCreationValues, CreateAccount, CreateAccountFlow, CreationState, FormError, FormField,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use std::rc::Rc;

/// Query of `/accounts/new`. The secret key is never passed through the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateAccountQuery {
    #[serde(default)]
    pub testnet: Option<bool>,
}

impl CreateAccountQuery {
    /// Network asked for by the query, else the configured default
    pub fn network(&self, default: Network) -> Network {
        self.testnet.map(Network::from_testnet).unwrap_or(default)
    }
}

pub fn parse_create_account_query(search: &str) -> CreateAccountQuery {
    let search = search.trim_start_matches('?');
    serde_qs::from_str(search).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed account creation query {search:?}: {e}");
        CreateAccountQuery::default()
    })
}

pub fn create_flow(
    network: Network,
    prefilled_secret_key: Option<String>,
    services: &WalletServices,
) -> CreateAccountFlow {
    let flow = CreateAccountFlow::new(
        network,
        services.accounts.clone(),
        services.navigator.clone(),
        services.errors.clone(),
    );
    match prefilled_secret_key {
        Some(secret_key) => flow.with_prefilled_secret_key(secret_key),
        None => flow,
    }
}

/// Form state of the account creation page, bound to a `CreateAccountFlow`
#[derive(Clone, Copy)]
pub struct CreateAccountViewModel {
    flow: StoredValue<Rc<CreateAccountFlow>, LocalStorage>,
    pub state: ReadSignal<CreationState>,
    pub network: Network,
    pub name: RwSignal<String>,
    pub create_new_key: RwSignal<bool>,
    generated_secret_key: StoredValue<String>,
    pub imported_secret_key: RwSignal<String>,
    pub set_password: RwSignal<bool>,
    pub password: RwSignal<String>,
    pub repeated_password: RwSignal<String>,
    pub error: RwSignal<Option<FormError>>,
}

impl CreateAccountViewModel {
    pub fn new(network: Network, prefilled_secret_key: Option<String>) -> Self {
        log::info!(
            "{}: opened on {network}{}",
            CreateAccount::full_name(),
            if prefilled_secret_key.is_some() { " with an imported key" } else { "" }
        );
        let services = use_wallet_services();
        let flow = create_flow(network, prefilled_secret_key, &services);
        let values = flow.initial_values(services.keys.as_ref());
        let state = use_observable(flow.state());

        Self {
            flow: StoredValue::new_local(Rc::new(flow)),
            state,
            network,
            name: RwSignal::new(values.name),
            create_new_key: RwSignal::new(values.create_new_key),
            generated_secret_key: StoredValue::new(values.generated_secret_key),
            imported_secret_key: RwSignal::new(values.imported_secret_key),
            set_password: RwSignal::new(values.set_password),
            password: RwSignal::new(values.password),
            repeated_password: RwSignal::new(values.repeated_password),
            error: RwSignal::new(None),
        }
    }

    fn values(&self) -> AccountCreationValues {
        AccountCreationValues {
            name: self.name.get_untracked(),
            create_new_key: self.create_new_key.get_untracked(),
            generated_secret_key: self.generated_secret_key.get_value(),
            imported_secret_key: self.imported_secret_key.get_untracked(),
            set_password: self.set_password.get_untracked(),
            password: self.password.get_untracked(),
            repeated_password: self.repeated_password.get_untracked(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.network.is_testnet() {
            "Add Testnet Account"
        } else {
            "Add Account"
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(CreationState::is_submitting)
    }

    /// Secret key to write down while the backup dialog is open
    pub fn pending_backup_key(&self) -> Option<String> {
        self.state
            .with(|state| state.pending_backup().is_some())
            .then(|| self.values().secret_key().to_string())
    }

    /// Validation message for `field`, if the last submit failed on it
    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.error.with(|error| {
            error
                .as_ref()
                .filter(|error| error.field() == field)
                .map(ToString::to_string)
        })
    }

    pub fn submit(&self) {
        let flow = self.flow.get_value();
        let values = self.values();
        let error = self.error;
        spawn_local(async move {
            let result = flow.submit(&values).await;
            // The page may already be gone after a successful submit
            let _ = error.try_set(result.err());
        });
    }

    pub fn confirm_backup(&self) {
        self.flow.with_value(|flow| flow.confirm_backup());
    }

    pub fn cancel(&self) {
        self.flow.with_value(|flow| flow.cancel());
    }
}
