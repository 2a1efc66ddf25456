//! Seed data for the browser mount.
//!
//! Two testnet accounts, one of them holding an issued asset of the other,
//! plus the issuer's `stellar.toml`.

use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::a003_account_data::AccountData;
use contracts::domain::a004_offer::AccountOffers;
use contracts::domain::common::Network;
use contracts::shared::memory::InMemoryWallet;
use contracts::shared::stellar_toml::StellarToml;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::rc::Rc;

const HOLDER: &str = "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";
const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";
const ISSUER_DOMAIN: &str = "anchor.example.com";

const ISSUER_TOML: &str = r#"
[DOCUMENTATION]
ORG_NAME = "Example Anchor Ltd."
ORG_DBA = "Example Anchor"
ORG_URL = "https://anchor.example.com"
ORG_DESCRIPTION = "Issues fiat-backed tokens on the test network."
ORG_OFFICIAL_EMAIL = "support@anchor.example.com"

[[CURRENCIES]]
code = "EURT"
issuer = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF"
name = "Euro Token"
desc = "One EURT is redeemable for one euro."
anchor_asset_type = "fiat"
anchor_asset = "EUR"
redemption_instructions = "Withdraw through anchor.example.com."
"#;

pub fn demo_wallet() -> Rc<InMemoryWallet> {
    let wallet = InMemoryWallet::new();

    for (index, public_key) in [HOLDER, ISSUER].into_iter().enumerate() {
        wallet.insert_account(Account {
            id: AccountId::new_v4(),
            name: format!("My Testnet Account #{}", index + 1),
            public_key: public_key.to_string(),
            network: Network::Testnet,
            requires_password: false,
        });
    }

    let holder = json!({
        "account_id": HOLDER,
        "subentry_count": 2,
        "balances": [
            {
                "balance": "250.0000000",
                "selling_liabilities": "40.0000000",
                "asset_type": "credit_alphanum4",
                "asset_code": "EURT",
                "asset_issuer": ISSUER
            },
            { "balance": "10000.0000000", "selling_liabilities": "120.0000000", "asset_type": "native" }
        ]
    });
    let issuer = json!({
        "account_id": ISSUER,
        "home_domain": ISSUER_DOMAIN,
        "flags": { "auth_required": false, "auth_revocable": true, "auth_immutable": false },
        "balances": [{ "balance": "9999.9999900", "asset_type": "native" }]
    });
    for data in [holder, issuer] {
        if let Some(data) = parse::<AccountData>(data) {
            wallet.set_account_data(Network::Testnet, data);
        }
    }

    let offers = json!({
        "offers": [
            {
                "id": "1001",
                "selling": { "asset_type": "native" },
                "buying": { "asset_type": "credit_alphanum4", "asset_code": "EURT", "asset_issuer": ISSUER },
                "amount": "120.0000000",
                "price": "0.0800000"
            },
            {
                "id": "1002",
                "selling": { "asset_type": "credit_alphanum4", "asset_code": "EURT", "asset_issuer": ISSUER },
                "buying": { "asset_type": "native" },
                "amount": "40.0000000",
                "price": "12.5000000"
            }
        ]
    });
    if let Some(offers) = parse::<AccountOffers>(offers) {
        wallet.set_offers(HOLDER, Network::Testnet, offers);
    }

    match StellarToml::parse(ISSUER_TOML) {
        Ok(toml) => wallet.set_stellar_toml(ISSUER_DOMAIN, toml),
        Err(e) => log::error!("demo stellar.toml: {e}"),
    }

    Rc::new(wallet)
}

fn parse<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value)
        .map_err(|e| log::error!("demo seed: {e}"))
        .ok()
}
