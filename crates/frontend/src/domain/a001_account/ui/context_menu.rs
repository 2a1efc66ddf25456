use crate::shared::components::context_menu::{ContextMenu, MenuEntry};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Trade,
    Withdraw,
    ManageAssets,
    AccountSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMenuEntry {
    Action {
        action: AccountAction,
        label: &'static str,
        icon: &'static str,
        disabled: bool,
    },
    Divider,
}

/// Menu layout; everything but the settings needs an activated account
pub fn account_menu_entries(activated: bool) -> Vec<AccountMenuEntry> {
    let action = |action, label, icon, needs_activation: bool| AccountMenuEntry::Action {
        action,
        label,
        icon,
        disabled: needs_activation && !activated,
    };
    vec![
        action(AccountAction::Trade, "Trade", "trade", true),
        action(AccountAction::Withdraw, "Withdraw", "withdraw", true),
        AccountMenuEntry::Divider,
        action(AccountAction::ManageAssets, "Assets & Balances", "money", true),
        action(AccountAction::AccountSettings, "Account Settings", "settings", false),
    ]
}

#[component]
pub fn AccountContextMenu(
    #[prop(into)]
    activated: Signal<bool>,
    on_trade: Callback<()>,
    on_withdraw: Callback<()>,
    on_manage_assets: Callback<()>,
    on_account_settings: Callback<()>,
) -> impl IntoView {
    let callback_for = move |action: AccountAction| match action {
        AccountAction::Trade => on_trade,
        AccountAction::Withdraw => on_withdraw,
        AccountAction::ManageAssets => on_manage_assets,
        AccountAction::AccountSettings => on_account_settings,
    };

    move || {
        let entries = account_menu_entries(activated.get())
            .into_iter()
            .map(|entry| match entry {
                AccountMenuEntry::Divider => MenuEntry::Divider,
                AccountMenuEntry::Action {
                    action,
                    label,
                    icon,
                    disabled,
                } => MenuEntry::Item {
                    label,
                    icon,
                    disabled,
                    hidden: false,
                    on_select: callback_for(action),
                },
            })
            .collect::<Vec<_>>();
        view! { <ContextMenu entries=entries anchor_title="Account actions" /> }
    }
}
