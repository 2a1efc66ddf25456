use crate::domain::a001_account::ui::selection_list::AccountSelectionList;
use crate::shared::components::main_title::MainTitle;
use crate::shared::config::use_wallet_config;
use crate::shared::icons::icon;
use crate::shared::services::{use_accounts, use_navigator};
use crate::usecases::u001_create_account::ImportKeyDialog;
use contracts::domain::a001_account::Account;
use contracts::shared::routes;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AllAccountsPage() -> impl IntoView {
    let config = use_wallet_config();
    let accounts = use_accounts();
    let show_testnet = config.display.show_testnet
        || accounts.with_untracked(|accounts| accounts.iter().any(Account::is_testnet));

    view! {
        <div id="a001_account--list" class="page">
            <MainTitle title="My Accounts" />
            <AccountsSection title="Accounts" testnet=false accounts=accounts />
            {show_testnet.then(|| view! {
                <AccountsSection title="Testnet Accounts" testnet=true accounts=accounts />
            })}
        </div>
    }
}

#[component]
fn AccountsSection(
    title: &'static str,
    testnet: bool,
    accounts: ReadSignal<Vec<Account>>,
) -> impl IntoView {
    let navigate = use_navigator();
    let on_select = Callback::new(move |account: Account| navigate(&routes::account(&account.id)));
    let importing = RwSignal::new(false);

    view! {
        <section class="accounts-section" style="margin: 16px 0;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 style="font-size: 18px; margin: 0;">{title}</h2>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| importing.set(true)
                    >
                        "Import key"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate(&routes::create_account(testnet))
                    >
                        {icon("add")}
                        "Add account"
                    </Button>
                </Flex>
            </Flex>
            <Show when=move || importing.get()>
                <ImportKeyDialog
                    testnet=testnet
                    on_close=Callback::new(move |_| importing.set(false))
                />
            </Show>
            <AccountSelectionList accounts=accounts testnet=testnet on_select=on_select />
        </section>
    }
}
