use crate::domain::common::Network;
use crate::shared::decimal::{BalanceFormat, Decimal};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid wallet config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WalletConfig {
    pub ledger: LedgerConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Base reserve per ledger entry, in native units
    pub base_reserve: Decimal,
    pub default_network: Network,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_testnet: bool,
    pub max_decimals: u32,
    pub group_thousands: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            // 0.5
            base_reserve: Decimal::from_parts(5, 1).unwrap_or_default(),
            default_network: Network::Mainnet,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_testnet: true,
            max_decimals: 7,
            group_thousands: false,
        }
    }
}

impl WalletConfig {
    pub fn balance_format(&self) -> BalanceFormat {
        BalanceFormat {
            max_decimals: self.display.max_decimals,
            min_decimals: 0,
            group_thousands: self.display.group_thousands,
        }
    }
}

/// Default configuration shipped with the wallet
pub const DEFAULT_CONFIG: &str = r#"
[ledger]
base_reserve = "0.5"
default_network = "mainnet"

[display]
show_testnet = true
max_decimals = 7
group_thousands = false
"#;

/// Load configuration from an optional TOML override.
///
/// Missing keys keep their defaults; without an override the embedded
/// default applies.
pub fn load_config(overrides: Option<&str>) -> Result<WalletConfig, ConfigError> {
    match overrides {
        Some(text) => {
            log::info!("Loading wallet config override");
            Ok(toml::from_str(text)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, WalletConfig::default());
        assert_eq!(config.ledger.base_reserve.to_string(), "0.5");
        assert_eq!(config.balance_format(), BalanceFormat::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(
            "[ledger]\ndefault_network = \"testnet\"\n[display]\ngroup_thousands = true\n",
        ))
        .unwrap();
        assert_eq!(config.ledger.default_network, Network::Testnet);
        assert_eq!(config.ledger.base_reserve.to_string(), "0.5");
        assert!(config.display.group_thousands);
        assert_eq!(config.display.max_decimals, 7);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(load_config(Some("[ledger]\nbase_reserve = \"lots\"\n")).is_err());
        assert!(load_config(Some("[display")).is_err());
    }
}
