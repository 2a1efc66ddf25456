use crate::routes::routes::AppRoutes;
use crate::shared::config::load_wallet_config;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::usecases::u001_create_account::SecretKeyHandoff;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Wallet configuration (embedded default + localStorage override)
    provide_context(load_wallet_config());

    // Toast-style notifications, also the process-wide error sink
    provide_context(NotificationService::new());

    // Imported secret keys travel to the creation page through context, never the URL
    provide_context(SecretKeyHandoff::new());

    view! {
        <ConfigProvider>
            <Router>
                <AppRoutes />
            </Router>
            <NotificationHost />
        </ConfigProvider>
    }
}
