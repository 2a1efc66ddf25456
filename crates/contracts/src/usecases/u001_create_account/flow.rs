//! Account creation flow: submit the form, optionally show the one-time
//! backup dialog, then navigate to the new account.

use super::form::{AccountCreationValues, FormError};
use crate::domain::a001_account::{default_account_name, Account};
use crate::domain::common::Network;
use crate::shared::observable::Observable;
use crate::shared::routes;
use crate::shared::services::{AccountService, ErrorTracker, KeyGenerator, Navigator};
use std::rc::Rc;

/// `Idle → Submitting → BackupPending → Closed`, `Submitting → Closed` or
/// back to `Idle` after a failure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreationState {
    #[default]
    Idle,
    Submitting,
    /// Account created on the production network, key backup not yet confirmed
    BackupPending(Account),
    Closed,
}

impl CreationState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, CreationState::Submitting)
    }

    pub fn pending_backup(&self) -> Option<&Account> {
        match self {
            CreationState::BackupPending(account) => Some(account),
            _ => None,
        }
    }
}

pub struct CreateAccountFlow {
    network: Network,
    prefilled_secret_key: Option<String>,
    accounts: Rc<dyn AccountService>,
    navigator: Rc<dyn Navigator>,
    errors: Rc<dyn ErrorTracker>,
    on_close: Option<Rc<dyn Fn()>>,
    state: Observable<CreationState>,
}

impl CreateAccountFlow {
    pub fn new(
        network: Network,
        accounts: Rc<dyn AccountService>,
        navigator: Rc<dyn Navigator>,
        errors: Rc<dyn ErrorTracker>,
    ) -> Self {
        Self {
            network,
            prefilled_secret_key: None,
            accounts,
            navigator,
            errors,
            on_close: None,
            state: Observable::default(),
        }
    }

    /// Open the flow for importing a known secret key
    pub fn with_prefilled_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.prefilled_secret_key = Some(secret_key.into());
        self
    }

    /// Replace the default close behaviour (navigate to all accounts)
    pub fn with_close_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(hook));
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn prefilled_secret_key(&self) -> Option<&str> {
        self.prefilled_secret_key.as_deref()
    }

    pub fn state(&self) -> Observable<CreationState> {
        self.state.clone()
    }

    pub fn initial_values(&self, keys: &dyn KeyGenerator) -> AccountCreationValues {
        let name = self
            .accounts
            .accounts()
            .with(|accounts| default_account_name(accounts, self.network));
        AccountCreationValues::new(name, self.prefilled_secret_key(), keys)
    }

    /// Validate and submit. Validation errors are returned for inline display;
    /// service failures go to the error tracker and reset the flow to `Idle`.
    pub async fn submit(&self, values: &AccountCreationValues) -> Result<(), FormError> {
        if self.state.with(|state| *state != CreationState::Idle) {
            log::debug!("account creation: submit ignored in state {:?}", self.state.get());
            return Ok(());
        }
        let request = values.to_request(self.network)?;

        self.state.set(CreationState::Submitting);
        let result = self.accounts.create_account(request).await;

        if !self.state.with(CreationState::is_submitting) {
            log::info!("account creation: flow closed while submitting");
            return Ok(());
        }
        match result {
            Ok(account) if self.needs_backup(values) => {
                log::info!("account creation: backup pending for {}", account.public_key);
                self.state.set(CreationState::BackupPending(account));
            }
            Ok(account) => self.finish(&account),
            Err(error) => {
                log::warn!("account creation failed: {error}");
                self.errors.track_error(&error);
                self.state.set(CreationState::Idle);
            }
        }
        Ok(())
    }

    /// Dismiss the backup dialog. Only the first call navigates.
    pub fn confirm_backup(&self) {
        let Some(account) = self.state.with(|state| state.pending_backup().cloned()) else {
            return;
        };
        self.finish(&account);
    }

    pub fn cancel(&self) {
        self.state.set(CreationState::Closed);
        match &self.on_close {
            Some(hook) => hook(),
            None => self.navigator.push(&routes::all_accounts()),
        }
    }

    fn needs_backup(&self, values: &AccountCreationValues) -> bool {
        !self.network.is_testnet() && (self.prefilled_secret_key.is_some() || values.create_new_key)
    }

    fn finish(&self, account: &Account) {
        self.state.set(CreationState::Closed);
        self.navigator.push(&routes::account(&account.id));
        if let Some(hook) = &self.on_close {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ServiceError;
    use crate::shared::memory::InMemoryWallet;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const SECRET: &str = "SBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn push(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingTracker(RefCell<Vec<ServiceError>>);

    impl ErrorTracker for RecordingTracker {
        fn track_error(&self, error: &ServiceError) {
            self.0.borrow_mut().push(error.clone());
        }
    }

    struct Fixture {
        wallet: Rc<InMemoryWallet>,
        navigator: Rc<RecordingNavigator>,
        tracker: Rc<RecordingTracker>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                wallet: Rc::new(InMemoryWallet::new()),
                navigator: Rc::new(RecordingNavigator::default()),
                tracker: Rc::new(RecordingTracker::default()),
            }
        }

        fn flow(&self, network: Network) -> CreateAccountFlow {
            CreateAccountFlow::new(
                network,
                self.wallet.clone(),
                self.navigator.clone(),
                self.tracker.clone(),
            )
        }

        fn pushed(&self) -> Vec<String> {
            self.navigator.0.borrow().clone()
        }

        fn created_route(&self) -> String {
            let account = self.wallet.accounts().with(|a| a[0].clone());
            routes::account(&account.id)
        }
    }

    #[test]
    fn test_mainnet_import_shows_backup_before_navigating() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Mainnet).with_prefilled_secret_key(SECRET);
        let values = flow.initial_values(fx.wallet.as_ref());
        assert_eq!(values.name, "My Account #1");

        block_on(flow.submit(&values)).unwrap();

        let pending = flow.state().with(|s| s.pending_backup().cloned());
        assert_eq!(pending.map(|a| a.public_key[1..].to_string()), Some(SECRET[1..].to_string()));
        assert!(fx.pushed().is_empty());

        flow.confirm_backup();
        flow.confirm_backup();
        assert_eq!(fx.pushed(), vec![fx.created_route()]);
        assert_eq!(flow.state().get(), CreationState::Closed);
    }

    #[test]
    fn test_testnet_navigates_immediately() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Testnet);
        let values = flow.initial_values(fx.wallet.as_ref());
        assert_eq!(values.name, "My Testnet Account #1");

        block_on(flow.submit(&values)).unwrap();

        assert_eq!(flow.state().get(), CreationState::Closed);
        assert_eq!(fx.pushed(), vec![fx.created_route()]);
    }

    #[test]
    fn test_mainnet_typed_import_skips_backup() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Mainnet);
        let mut values = flow.initial_values(fx.wallet.as_ref());
        values.create_new_key = false;
        values.imported_secret_key = SECRET.to_string();

        block_on(flow.submit(&values)).unwrap();
        assert_eq!(fx.pushed(), vec![fx.created_route()]);
    }

    #[test]
    fn test_failure_is_tracked_and_form_stays_usable() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Mainnet);
        let values = flow.initial_values(fx.wallet.as_ref());
        let error = ServiceError::Storage("quota exceeded".into());
        fx.wallet.fail_next_creation(error.clone());

        block_on(flow.submit(&values)).unwrap();

        assert_eq!(*fx.tracker.0.borrow(), vec![error]);
        assert!(fx.pushed().is_empty());
        assert_eq!(flow.state().get(), CreationState::Idle);

        block_on(flow.submit(&values)).unwrap();
        assert!(flow.state().with(|s| s.pending_backup().is_some()));
    }

    #[test]
    fn test_validation_error_does_not_call_service() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Testnet);
        let mut values = flow.initial_values(fx.wallet.as_ref());
        values.name.clear();

        assert_eq!(block_on(flow.submit(&values)), Err(FormError::MissingName));
        assert!(fx.wallet.accounts().get().is_empty());
        assert!(fx.tracker.0.borrow().is_empty());
        assert_eq!(flow.state().get(), CreationState::Idle);
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let fx = Fixture::new();
        let flow = fx.flow(Network::Testnet);
        let values = flow.initial_values(fx.wallet.as_ref());
        flow.state.set(CreationState::Submitting);

        block_on(flow.submit(&values)).unwrap();
        assert!(fx.wallet.accounts().get().is_empty());
        assert!(fx.pushed().is_empty());
    }

    #[test]
    fn test_cancel_and_close_hook() {
        let fx = Fixture::new();
        fx.flow(Network::Mainnet).cancel();
        assert_eq!(fx.pushed(), vec!["/".to_string()]);

        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let flow = fx
            .flow(Network::Testnet)
            .with_close_hook(move || counter.set(counter.get() + 1));
        flow.cancel();
        assert_eq!(closed.get(), 1);
        assert_eq!(fx.pushed().len(), 1);

        let flow = fx
            .flow(Network::Testnet)
            .with_close_hook({
                let closed = closed.clone();
                move || closed.set(closed.get() + 1)
            });
        block_on(flow.submit(&flow.initial_values(fx.wallet.as_ref()))).unwrap();
        assert_eq!(closed.get(), 2);
        assert_eq!(fx.pushed().last(), Some(&fx.created_route()));
    }
}
