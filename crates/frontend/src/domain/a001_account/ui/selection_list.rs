use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::common::{shorten_public_key, Network};
use leptos::prelude::*;

/// Accounts of one network, in list order
pub fn accounts_for_network(accounts: &[Account], network: Network) -> Vec<Account> {
    accounts
        .iter()
        .filter(|account| account.network == network)
        .cloned()
        .collect()
}

#[component]
pub fn AccountSelectionList(
    #[prop(into)]
    accounts: Signal<Vec<Account>>,
    testnet: bool,
    /// Render rows greyed out and ignore clicks
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_select: Option<Callback<Account>>,
) -> impl IntoView {
    let network = Network::from_testnet(testnet);
    let selected = RwSignal::new(None::<AccountId>);
    let visible = Memo::new(move |_| accounts.with(|accounts| accounts_for_network(accounts, network)));

    let select = move |account: Account| {
        if disabled.get_untracked().unwrap_or(false) {
            return;
        }
        selected.set(Some(account.id));
        if let Some(on_select) = on_select {
            on_select.run(account);
        }
    };

    view! {
        <ul
            class="account-selection-list"
            style=move || if disabled.get().unwrap_or(false) { "list-style: none; padding: 0; opacity: 0.5;" } else { "list-style: none; padding: 0;" }
        >
            <For
                each=move || visible.get()
                key=|account| account.id
                children=move |account: Account| {
                    let id = account.id;
                    let short_key = shorten_public_key(&account.public_key);
                    let name = account.name.clone();
                    view! {
                        <li
                            class="account-selection-list__item"
                            class:selected=move || selected.get() == Some(id)
                            style="display: flex; flex-direction: column; padding: 8px 16px; cursor: pointer;"
                            on:click=move |_| select(account.clone())
                        >
                            <span class="account-selection-list__name">{name}</span>
                            <span class="account-selection-list__key" style="font-size: 12px; opacity: 0.7;">
                                {short_key}
                            </span>
                        </li>
                    }
                }
            />
            <Show when=move || visible.with(Vec::is_empty)>
                <li class="account-selection-list__empty" style="padding: 8px 16px; opacity: 0.7;">
                    "No accounts yet"
                </li>
            </Show>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn account(n: u128, name: &str, network: Network) -> Account {
        Account {
            id: AccountId(Uuid::from_u128(n)),
            name: name.into(),
            public_key: "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF".into(),
            network,
            requires_password: false,
        }
    }

    #[test]
    fn test_filters_by_network_keeping_order() {
        let accounts = vec![
            account(1, "My Testnet Account #1", Network::Testnet),
            account(2, "My Account #1", Network::Mainnet),
            account(3, "My Testnet Account #2", Network::Testnet),
        ];
        let names: Vec<_> = accounts_for_network(&accounts, Network::Testnet)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["My Testnet Account #1", "My Testnet Account #2"]);
        assert_eq!(accounts_for_network(&accounts, Network::Mainnet).len(), 1);
    }
}
