use contracts::domain::a001_account::{account_name_for, Account};
use contracts::domain::common::{shorten_public_key, Network};

/// Local account name of `public_key`, or the shortened key
pub fn account_label(accounts: &[Account], public_key: &str, network: Network) -> String {
    account_name_for(accounts, public_key, network)
        .map(str::to_string)
        .unwrap_or_else(|| shorten_public_key(public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_account::AccountId;
    use uuid::Uuid;

    const KEY: &str = "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";

    #[test]
    fn test_account_label() {
        let accounts = vec![Account {
            id: AccountId(Uuid::nil()),
            name: "Savings".into(),
            public_key: KEY.into(),
            network: Network::Testnet,
            requires_password: false,
        }];
        assert_eq!(account_label(&accounts, KEY, Network::Testnet), "Savings");
        assert_eq!(
            account_label(&accounts, KEY, Network::Mainnet),
            shorten_public_key(KEY)
        );
    }
}
