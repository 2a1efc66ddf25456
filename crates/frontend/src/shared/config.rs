//! Wallet configuration for the browser: the embedded default TOML, optionally
//! overridden by a TOML document stored in localStorage.

use contracts::shared::config::{load_config, WalletConfig};
use leptos::prelude::*;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "wallet.config";

fn load_override_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .filter(|text| !text.trim().is_empty())
}

/// Load the configuration; a broken override falls back to the defaults.
pub fn load_wallet_config() -> WalletConfig {
    let overrides = load_override_from_storage();
    match load_config(overrides.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring {CONFIG_STORAGE_KEY} from localStorage: {err}");
            WalletConfig::default()
        }
    }
}

pub fn use_wallet_config() -> WalletConfig {
    use_context::<WalletConfig>().unwrap_or_default()
}
