use super::view_model::AccountDetailsViewModel;
use crate::domain::a001_account::ui::context_menu::AccountContextMenu;
use crate::shared::components::main_title::MainTitle;
use crate::shared::config::use_wallet_config;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use crate::shared::services::use_accounts;
use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::common::{shorten_public_key, AggregateId};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Account resolved from the `:id` route parameter
pub fn use_route_account() -> Memo<Option<Account>> {
    let params = use_params_map();
    let accounts = use_accounts();
    Memo::new(move |_| {
        let id = params.with(|p| p.get("id"))?;
        let id = AccountId::from_string(&id).ok()?;
        accounts.with(|accounts| accounts.iter().find(|a| a.id == id).cloned())
    })
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let account = use_route_account();

    move || match account.get() {
        Some(account) => view! { <AccountDetails account=account /> }.into_any(),
        None => view! {
            <div class="page">
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>"Account not found."</MessageBarBody>
                </MessageBar>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn AccountDetails(account: Account) -> impl IntoView {
    let config = use_wallet_config();
    let notifications = use_context::<NotificationService>();
    let title = account.name.clone();
    let subtitle = format!("{} · {}", account.network, shorten_public_key(&account.public_key));
    let vm = AccountDetailsViewModel::new(account, config.balance_format());

    let not_available = move |feature: &'static str| {
        Callback::new(move |_| {
            log::info!("{feature} requested");
            if let Some(notifications) = notifications {
                notifications.show_info(format!("{feature} is not available in this wallet."));
            }
        })
    };

    view! {
        <div id="a001_account--detail" class="page page--detail">
            <MainTitle title=title on_back=Callback::new(move |_| vm.back_command())>
                <AccountContextMenu
                    activated=vm.activated()
                    on_trade=not_available("Trading")
                    on_withdraw=not_available("Withdrawal")
                    on_manage_assets=Callback::new(move |_| vm.manage_assets_command())
                    on_account_settings=not_available("Account settings")
                />
            </MainTitle>
            <div class="page-header__subtitle" style="margin: -8px 0 16px;">{subtitle}</div>

            <Show when=move || !vm.activated().get()>
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        "This account does not exist on the network yet. Fund it to activate it."
                    </MessageBarBody>
                </MessageBar>
            </Show>

            <ul class="account-balances" style="list-style: none; padding: 0;">
                <For
                    each=move || vm.balances()
                    key=|row| row.clone()
                    children=move |row| {
                        let asset = row.asset.clone();
                        view! {
                            <li
                                class="account-balances__item"
                                style="display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; cursor: pointer;"
                                on:click=move |_| vm.open_asset_command(&asset)
                            >
                                <span class="account-balances__code">{row.code.clone()}</span>
                                <span class="account-balances__amount">
                                    {row.amount.clone()}
                                    {icon("chevron-right")}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>

            <Outlet />
        </div>
    }
}
