use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger network an account lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn from_testnet(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_testnet_flag() {
        assert_eq!(Network::from_testnet(true), Network::Testnet);
        assert_eq!(Network::from_testnet(false), Network::Mainnet);
        assert!(Network::Testnet.is_testnet());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), "\"testnet\"");
        let parsed: Network = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(parsed, Network::Mainnet);
    }
}
