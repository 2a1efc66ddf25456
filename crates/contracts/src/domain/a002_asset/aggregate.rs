use crate::domain::common::is_valid_public_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Code the native asset is displayed with
pub const NATIVE_CODE: &str = "XLM";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("invalid asset id: {0:?}")]
    InvalidId(String),
    #[error("invalid asset code: {0:?}")]
    InvalidCode(String),
    #[error("invalid issuer: {0:?}")]
    InvalidIssuer(String),
    #[error("balance line of type {0} has no code/issuer")]
    IncompleteReference(String),
    #[error("unsupported ledger asset type")]
    UnsupportedType,
}

// ============================================================================
// Asset
// ============================================================================

/// Ledger asset: the network's native currency or an issuer-defined token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Asset {
    Native,
    Issued { code: String, issuer: String },
}

impl Asset {
    /// Build an issued asset, validating code and issuer
    pub fn issued(code: impl Into<String>, issuer: impl Into<String>) -> Result<Self, AssetError> {
        let code = code.into();
        let issuer = issuer.into();
        if code.is_empty() || code.len() > 12 || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AssetError::InvalidCode(code));
        }
        if !is_valid_public_key(&issuer) {
            return Err(AssetError::InvalidIssuer(issuer));
        }
        Ok(Asset::Issued { code, issuer })
    }

    /// Parse an asset ID as produced by [`Asset::id`]: `XLM` or `<issuer>:<code>`
    pub fn parse_id(id: &str) -> Result<Self, AssetError> {
        if id == NATIVE_CODE {
            return Ok(Asset::Native);
        }
        match id.split_once(':') {
            Some((issuer, code)) if !code.contains(':') => Asset::issued(code, issuer),
            _ => Err(AssetError::InvalidId(id.to_string())),
        }
    }

    /// Stable string ID used in routes and map keys
    pub fn id(&self) -> String {
        match self {
            Asset::Native => NATIVE_CODE.to_string(),
            Asset::Issued { code, issuer } => format!("{issuer}:{code}"),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    pub fn code(&self) -> &str {
        match self {
            Asset::Native => NATIVE_CODE,
            Asset::Issued { code, .. } => code,
        }
    }

    pub fn issuer(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Issued { issuer, .. } => Some(issuer),
        }
    }

    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Native => AssetType::Native,
            Asset::Issued { code, .. } if code.len() <= 4 => AssetType::CreditAlphanum4,
            Asset::Issued { .. } => AssetType::CreditAlphanum12,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Wire shape used by balances and offers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Native,
    CreditAlphanum4,
    CreditAlphanum12,
    /// Anything else the ledger reports (e.g. `liquidity_pool_shares`)
    #[serde(other)]
    Other,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetType::Native => "native",
            AssetType::CreditAlphanum4 => "credit_alphanum4",
            AssetType::CreditAlphanum12 => "credit_alphanum12",
            AssetType::Other => "other",
        })
    }
}

/// Asset reference as it appears in ledger records (balance lines, offers)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerAssetRef {
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl LedgerAssetRef {
    pub fn native() -> Self {
        Self {
            asset_type: AssetType::Native,
            asset_code: None,
            asset_issuer: None,
        }
    }

    /// Triple equality for issued assets, type-tag equality for native
    pub fn matches(&self, asset: &Asset) -> bool {
        match asset {
            Asset::Native => self.asset_type == AssetType::Native,
            Asset::Issued { code, issuer } => {
                self.asset_type == asset.asset_type()
                    && self.asset_issuer.as_deref() == Some(issuer.as_str())
                    && self.asset_code.as_deref() == Some(code.as_str())
            }
        }
    }

    /// Code shown next to amounts (`XLM` for native)
    pub fn display_code(&self) -> &str {
        match self.asset_type {
            AssetType::Native => NATIVE_CODE,
            _ => self.asset_code.as_deref().unwrap_or_default(),
        }
    }

    pub fn to_asset(&self) -> Result<Asset, AssetError> {
        match (self.asset_type, &self.asset_code, &self.asset_issuer) {
            (AssetType::Native, _, _) => Ok(Asset::Native),
            (AssetType::Other, _, _) => Err(AssetError::UnsupportedType),
            (_, Some(code), Some(issuer)) => Asset::issued(code.clone(), issuer.clone()),
            (asset_type, _, _) => Err(AssetError::IncompleteReference(asset_type.to_string())),
        }
    }
}

impl From<&Asset> for LedgerAssetRef {
    fn from(asset: &Asset) -> Self {
        match asset {
            Asset::Native => LedgerAssetRef::native(),
            Asset::Issued { code, issuer } => LedgerAssetRef {
                asset_type: asset.asset_type(),
                asset_code: Some(code.clone()),
                asset_issuer: Some(issuer.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";

    #[test]
    fn test_parse_native_and_issued_ids() {
        assert_eq!(Asset::parse_id("XLM").unwrap(), Asset::Native);
        let usd = Asset::parse_id(&format!("{ISSUER}:USD")).unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.issuer(), Some(ISSUER));
        assert_eq!(usd.id(), format!("{ISSUER}:USD"));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        assert!(matches!(Asset::parse_id("USD"), Err(AssetError::InvalidId(_))));
        assert!(matches!(
            Asset::parse_id("GABC:USD"),
            Err(AssetError::InvalidIssuer(_))
        ));
        assert!(matches!(
            Asset::parse_id(&format!("{ISSUER}:TOOLONGASSETCODE")),
            Err(AssetError::InvalidCode(_))
        ));
        assert!(Asset::parse_id(&format!("{ISSUER}:USD:X")).is_err());
    }

    #[test]
    fn test_asset_type_follows_code_length() {
        assert_eq!(Asset::Native.asset_type(), AssetType::Native);
        assert_eq!(Asset::issued("USD", ISSUER).unwrap().asset_type(), AssetType::CreditAlphanum4);
        assert_eq!(
            Asset::issued("LONGCODE", ISSUER).unwrap().asset_type(),
            AssetType::CreditAlphanum12
        );
    }

    #[test]
    fn test_ref_matching() {
        let usd = Asset::issued("USD", ISSUER).unwrap();
        let usd_ref = LedgerAssetRef::from(&usd);
        assert!(usd_ref.matches(&usd));
        assert!(!usd_ref.matches(&Asset::Native));
        assert!(LedgerAssetRef::native().matches(&Asset::Native));
        assert!(!LedgerAssetRef::native().matches(&usd));

        let other_issuer = LedgerAssetRef {
            asset_issuer: Some("GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W".into()),
            ..usd_ref.clone()
        };
        assert!(!other_issuer.matches(&usd));
    }

    #[test]
    fn test_ref_deserializes_from_ledger_json() {
        let json = format!(
            r#"{{"asset_type":"credit_alphanum4","asset_code":"USD","asset_issuer":"{ISSUER}"}}"#
        );
        let parsed: LedgerAssetRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_asset().unwrap(), Asset::issued("USD", ISSUER).unwrap());
        let native: LedgerAssetRef = serde_json::from_str(r#"{"asset_type":"native"}"#).unwrap();
        assert_eq!(native.display_code(), "XLM");
    }
}
