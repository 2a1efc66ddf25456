use crate::domain::a002_asset::{Asset, LedgerAssetRef};
use crate::shared::decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Authorization flags of an (issuing) account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountFlags {
    #[serde(default)]
    pub auth_required: bool,
    #[serde(default)]
    pub auth_revocable: bool,
    #[serde(default)]
    pub auth_immutable: bool,
}

impl AccountFlags {
    /// One fixed line per flag, in display order
    pub fn describe(&self) -> [&'static str; 3] {
        [
            if self.auth_required {
                "• Authorization by issuer required"
            } else {
                "• No authorization required"
            },
            if self.auth_revocable {
                "• Authorization revocable"
            } else {
                "• Authorization not revocable"
            },
            if self.auth_immutable {
                "• These flags are immutable"
            } else {
                "• Issuer can change these flags"
            },
        ]
    }
}

/// One entry of an account's balance list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLine {
    #[serde(flatten)]
    pub asset: LedgerAssetRef,
    pub balance: Decimal,
    #[serde(default)]
    pub buying_liabilities: Decimal,
    #[serde(default)]
    pub selling_liabilities: Decimal,
}

impl BalanceLine {
    pub fn matches(&self, asset: &Asset) -> bool {
        self.asset.matches(asset)
    }
}

/// Snapshot of an account's ledger entry, as delivered by the live data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(rename = "account_id")]
    pub public_key: String,
    #[serde(default)]
    pub balances: Vec<BalanceLine>,
    #[serde(default)]
    pub flags: AccountFlags,
    #[serde(default)]
    pub home_domain: Option<String>,
    #[serde(default)]
    pub subentry_count: u32,
    /// `false` for accounts that do not exist on the ledger (yet)
    #[serde(default = "default_activated")]
    pub activated: bool,
}

fn default_activated() -> bool {
    true
}

impl AccountData {
    /// Default snapshot handed out before any data arrived
    pub fn unactivated(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            balances: Vec::new(),
            flags: AccountFlags::default(),
            home_domain: None,
            subentry_count: 0,
            activated: false,
        }
    }

    /// Parse a ledger (Horizon-style) account JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Non-empty home domain, if any
    pub fn home_domain(&self) -> Option<&str> {
        self.home_domain.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_asset::AssetType;

    const ACCOUNT_JSON: &str = r#"{
        "account_id": "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W",
        "subentry_count": 2,
        "home_domain": "anchor.example.com",
        "flags": { "auth_required": true, "auth_revocable": false, "auth_immutable": false },
        "balances": [
            {
                "balance": "100.5000000",
                "limit": "922337203685.4775807",
                "buying_liabilities": "0.0000000",
                "selling_liabilities": "10.0000000",
                "asset_type": "credit_alphanum4",
                "asset_code": "USD",
                "asset_issuer": "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF"
            },
            { "balance": "42.0000000", "asset_type": "native" }
        ]
    }"#;

    #[test]
    fn test_parse_ledger_json() {
        let data = AccountData::from_json(ACCOUNT_JSON).unwrap();
        assert!(data.activated);
        assert_eq!(data.subentry_count, 2);
        assert_eq!(data.home_domain(), Some("anchor.example.com"));
        assert!(data.flags.auth_required);
        assert_eq!(data.balances.len(), 2);
        assert_eq!(data.balances[0].asset.asset_type, AssetType::CreditAlphanum4);
        assert_eq!(data.balances[0].selling_liabilities.to_string(), "10");
        assert!(data.balances[1].matches(&Asset::Native));
        assert!(data.balances[1].buying_liabilities.is_zero());
    }

    #[test]
    fn test_liquidity_pool_lines_keep_the_snapshot() {
        let json = r#"{
            "account_id": "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W",
            "home_domain": "anchor.example.com",
            "balances": [
                { "balance": "5.0000000", "liquidity_pool_id": "abcd", "asset_type": "liquidity_pool_shares" },
                { "balance": "42.0000000", "asset_type": "native" }
            ]
        }"#;
        let data = AccountData::from_json(json).unwrap();
        assert_eq!(data.home_domain(), Some("anchor.example.com"));
        assert_eq!(data.balances.len(), 2);

        let pool = &data.balances[0];
        assert_eq!(pool.asset.asset_type, AssetType::Other);
        assert!(!pool.matches(&Asset::Native));
        assert!(pool.asset.to_asset().is_err());
        assert!(data.balances[1].matches(&Asset::Native));
    }

    #[test]
    fn test_flag_descriptions() {
        let flags = AccountFlags {
            auth_required: true,
            auth_revocable: false,
            auth_immutable: true,
        };
        assert_eq!(
            flags.describe(),
            [
                "• Authorization by issuer required",
                "• Authorization not revocable",
                "• These flags are immutable",
            ]
        );
        assert_eq!(
            AccountFlags::default().describe(),
            [
                "• No authorization required",
                "• Authorization not revocable",
                "• Issuer can change these flags",
            ]
        );
    }

    #[test]
    fn test_unactivated_snapshot() {
        let data = AccountData::unactivated("GABC");
        assert!(!data.activated);
        assert!(data.balances.is_empty());
        assert_eq!(data.home_domain(), None);
    }
}
