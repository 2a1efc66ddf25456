use crate::demo::demo_wallet;
use crate::domain::a001_account::ui::details::AccountPage;
use crate::domain::a001_account::ui::list::AllAccountsPage;
use crate::domain::a002_asset::ui::details::AssetDetailsRoute;
use crate::shared::notifications::NotificationService;
use crate::shared::services::{provide_wallet_services, RouterNavigator, WalletServices};
use crate::usecases::u001_create_account::CreateAccountPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;
use std::rc::Rc;

/// Wire the collaborators; needs the router (navigation) and the notification context
fn wallet_services() -> WalletServices {
    let wallet = demo_wallet();
    let notifications = use_context::<NotificationService>()
        .expect("NotificationService context not found");

    WalletServices {
        accounts: wallet.clone(),
        ledger: wallet.clone(),
        metadata: wallet.clone(),
        keys: wallet,
        navigator: Rc::new(RouterNavigator::new()),
        errors: Rc::new(notifications),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    provide_wallet_services(wallet_services());

    view! {
        <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
            <Route path=path!("/") view=AllAccountsPage />
            <Route path=path!("/accounts/new") view=|| view! { <CreateAccountPage /> } />
            <ParentRoute path=path!("/account/:id") view=AccountPage>
                <Route path=path!("") view=|| () />
                <Route path=path!("assets/:asset") view=AssetDetailsRoute />
            </ParentRoute>
        </Routes>
    }
}
