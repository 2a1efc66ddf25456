use crate::domain::common::{AggregateId, Network};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Local identifier of a wallet account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for AccountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Wallet account as exposed by the account service (read-only here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    pub network: Network,
    #[serde(rename = "requiresPassword")]
    pub requires_password: bool,
}

impl Account {
    pub fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }
}

/// Parameters of `AccountService::create_account`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccountRequest {
    pub name: String,
    pub secret_key: String,
    pub password: Option<String>,
    pub network: Network,
}

/// `My Account #3`, `My Testnet Account #1`, numbered per network
pub fn default_account_name(accounts: &[Account], network: Network) -> String {
    let count = accounts.iter().filter(|a| a.network == network).count();
    let kind = if network.is_testnet() { "Testnet Account" } else { "Account" };
    format!("My {} #{}", kind, count + 1)
}

/// Resolve a public key to one of the user's account names
pub fn account_name_for<'a>(
    accounts: &'a [Account],
    public_key: &str,
    network: Network,
) -> Option<&'a str> {
    accounts
        .iter()
        .find(|a| a.public_key == public_key && a.network == network)
        .map(|a| a.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, network: Network) -> Account {
        Account {
            id: AccountId::new_v4(),
            name: name.to_string(),
            public_key: "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W".to_string(),
            network,
            requires_password: false,
        }
    }

    #[test]
    fn test_default_account_name_counts_per_network() {
        let accounts = vec![
            account("My Testnet Account #1", Network::Testnet),
            account("My Testnet Account #2", Network::Testnet),
            account("Savings", Network::Mainnet),
        ];
        assert_eq!(default_account_name(&accounts, Network::Testnet), "My Testnet Account #3");
        assert_eq!(default_account_name(&accounts, Network::Mainnet), "My Account #2");
        assert_eq!(default_account_name(&[], Network::Mainnet), "My Account #1");
    }

    #[test]
    fn test_account_id_round_trip_through_string() {
        let id = AccountId::new_v4();
        assert_eq!(AccountId::from_string(&id.as_string()).unwrap(), id);
        assert!(AccountId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_account_name_lookup_respects_network() {
        let accounts = vec![account("Savings", Network::Mainnet)];
        let key = accounts[0].public_key.clone();
        assert_eq!(account_name_for(&accounts, &key, Network::Mainnet), Some("Savings"));
        assert_eq!(account_name_for(&accounts, &key, Network::Testnet), None);
    }
}
