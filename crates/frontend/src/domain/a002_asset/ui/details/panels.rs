use crate::domain::a002_asset::ui::spendable_balance::SpendableBalanceBreakdown;
use crate::shared::components::expandable_card::ExpandableCard;
use crate::shared::components::read_only_field::{DetailRows, ReadOnlyField};
use crate::shared::config::use_wallet_config;
use crate::shared::services::{use_account_data, use_account_offers, use_stellar_toml};
use contracts::domain::a001_account::Account;
use contracts::domain::a002_asset::Asset;
use contracts::projections::p001_asset_position::asset_position;
use contracts::projections::p002_asset_details::{
    asset_detail_rows, organization_logo, organization_rows, AssetDetailsInput, LUMEN_DESCRIPTION,
};
use contracts::shared::stellar_toml::CurrencyMetadata;
use leptos::prelude::*;
use thaw::Card;

const CARD_STYLE: &str = "margin: 12px 0; border-radius: 8px; background-color: #fbfbfb;";

/// Balance and open offers of `account` in `asset`; nothing without a balance line
#[component]
pub fn AccountRelatedData(account: Account, asset: Asset) -> impl IntoView {
    let format = use_wallet_config().balance_format();
    let data = use_account_data(&account.public_key, account.network);
    let offers = use_account_offers(&account.public_key, account.network);
    let position = Memo::new(move |_| {
        data.with(|data| offers.with(|offers| asset_position(data, offers, &asset, format)))
    });

    move || {
        position.get().map(|position| {
            view! {
                <Card attr:class="detail-card" attr:style=CARD_STYLE>
                    <ReadOnlyField label="Account balance" value=position.balance />
                    <ReadOnlyField label="Open trade offers" value=position.open_offers multiline=true />
                </Card>
            }
        })
    }
}

#[component]
pub fn LumenDetails(account: Account) -> impl IntoView {
    let config = use_wallet_config();
    let data = use_account_data(&account.public_key, account.network);

    view! {
        <AccountRelatedData account=account asset=Asset::Native />
        <Card attr:class="detail-card" attr:style=CARD_STYLE>
            <ReadOnlyField label="Description" value=LUMEN_DESCRIPTION.to_string() multiline=true />
        </Card>
        <Card attr:class="detail-card" attr:style=CARD_STYLE>
            <SpendableBalanceBreakdown
                account_data=data
                base_reserve=config.ledger.base_reserve
                format=config.balance_format()
            />
        </Card>
    }
}

#[component]
pub fn AssetDetails(
    account: Account,
    asset: Asset,
    #[prop(into)]
    metadata: Signal<Option<CurrencyMetadata>>,
) -> impl IntoView {
    let issuer = asset.issuer().unwrap_or_default().to_string();
    let issuer_data = use_account_data(&issuer, account.network);
    let home_domain =
        Memo::new(move |_| issuer_data.with(|data| data.home_domain().map(str::to_string)));
    let rows = Memo::new(move |_| {
        let flags = issuer_data.with(|data| data.flags);
        metadata.with(|metadata| {
            asset_detail_rows(&AssetDetailsInput {
                metadata: metadata.as_ref(),
                issuer: Some(issuer.as_str()),
                issuer_flags: Some(&flags),
            })
        })
    });

    view! {
        <AccountRelatedData account=account asset=asset />
        <ExpandableCard title="Asset details" expanded=true>
            {move || view! { <DetailRows rows=rows.get() /> }}
        </ExpandableCard>
        {move || home_domain.get().map(|domain| view! { <IssuerDetails domain=domain /> })}
    }
}

/// Organization panel, shown only when the issuer's TOML has a DOCUMENTATION section
#[component]
fn IssuerDetails(domain: String) -> impl IntoView {
    let toml = use_stellar_toml(&domain);
    let documentation = Memo::new(move |_| {
        toml.with(|toml| toml.as_ref().and_then(|toml| toml.documentation.clone()))
    });

    move || {
        documentation.get().map(|doc| {
            let logo = organization_logo(&doc).map(str::to_string);
            let rows = organization_rows(&doc);
            view! {
                <ExpandableCard title="Issuer details">
                    {logo.clone().map(|src| view! {
                        <img
                            class="detail-card__logo"
                            src=src
                            alt="Organization logo"
                            style="position: absolute; top: 8px; right: 8px; width: 72px; height: 72px; border-radius: 50%; box-shadow: 0 0 2px 2px rgba(0, 0, 0, 0.2);"
                        />
                    })}
                    <DetailRows rows=rows.clone() />
                </ExpandableCard>
            }
        })
    }
}
