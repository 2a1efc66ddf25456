use super::panels::{AssetDetails, LumenDetails};
use super::view_model::AssetDetailsViewModel;
use crate::domain::a001_account::ui::details::use_route_account;
use crate::domain::a002_asset::ui::logo::AssetLogo;
use crate::shared::components::dialog_frame::DialogFrame;
use crate::shared::components::main_title::MainTitle;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::services::use_navigator;
use contracts::domain::a001_account::Account;
use contracts::domain::a002_asset::Asset;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn AssetDetailsDialog(account: Account, asset: Asset, on_close: Callback<()>) -> impl IntoView {
    let vm = AssetDetailsViewModel::new(account.clone(), asset.clone());

    let top = move || {
        view! {
            <MainTitle
                title=Signal::derive(move || vm.title())
                on_back=on_close
                nowrap=true
            />
            <div class="asset-details__domain" style="margin: -4px 0 16px 47px;">
                {move || vm.subtitle()}
            </div>
            <div style="position: absolute; top: 4px; right: -4px;">
                <AssetLogo
                    asset=vm.asset.get_value()
                    image_url=Signal::derive(move || vm.logo_url())
                />
            </div>
        }
    };

    let body = if asset.is_native() {
        view! { <LumenDetails account=account /> }.into_any()
    } else {
        view! {
            <AssetDetails
                account=account
                asset=asset
                metadata=Signal::derive(move || vm.currency())
            />
        }
        .into_any()
    };

    view! {
        <DialogFrame top=top>
            <div class="asset-details" style="margin: 16px 4px 0;">
                <Show when=move || vm.is_loading()>
                    <Spinner />
                </Show>
                {body}
            </div>
        </DialogFrame>
    }
}

/// `/account/:id/assets/:asset`, rendered over the account page
#[component]
pub fn AssetDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let account = use_route_account();
    let navigate = use_navigator();

    move || {
        let Some(account) = account.get() else {
            return ().into_any();
        };
        let back_path = routes::account(&account.id);
        let on_close = Callback::new(move |_| navigate(&back_path));
        let asset_id = params.with(|p| p.get("asset")).unwrap_or_default();

        match Asset::parse_id(&asset_id) {
            Ok(asset) => view! {
                <ModalFrame fullscreen=true on_close=on_close>
                    <AssetDetailsDialog account=account asset=asset on_close=on_close />
                </ModalFrame>
            }
            .into_any(),
            Err(err) => {
                log::warn!("Asset details for unknown asset {asset_id:?}: {err}");
                view! {
                    <ModalFrame on_close=on_close>
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{format!("Unknown asset: {err}")}</MessageBarBody>
                        </MessageBar>
                    </ModalFrame>
                }
                .into_any()
            }
        }
    }
}
