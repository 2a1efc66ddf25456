//! Typed view of an issuer's `stellar.toml` document.
//!
//! Fetching the document is the metadata source's job; this module only
//! parses the text and answers lookups against it.

use crate::domain::a002_asset::Asset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TomlError {
    #[error("invalid stellar.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Issuer organization section (`[DOCUMENTATION]`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrgDocumentation {
    pub org_name: Option<String>,
    pub org_dba: Option<String>,
    pub org_url: Option<String>,
    pub org_logo: Option<String>,
    pub org_description: Option<String>,
    pub org_physical_address: Option<String>,
    pub org_official_email: Option<String>,
    pub org_phone_number: Option<String>,
}

/// One `[[CURRENCIES]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrencyMetadata {
    pub code: Option<String>,
    pub issuer: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub conditions: Option<String>,
    pub image: Option<String>,
    pub anchor_asset_type: Option<String>,
    pub anchor_asset: Option<String>,
    pub redemption_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StellarToml {
    #[serde(rename = "DOCUMENTATION", default)]
    pub documentation: Option<OrgDocumentation>,
    #[serde(rename = "CURRENCIES", default)]
    pub currencies: Vec<CurrencyMetadata>,
}

impl StellarToml {
    pub fn parse(text: &str) -> Result<Self, TomlError> {
        Ok(toml::from_str(text)?)
    }

    /// Currency entry describing `asset`; entries without an issuer match by code
    pub fn currency_for(&self, asset: &Asset) -> Option<&CurrencyMetadata> {
        let Asset::Issued { code, issuer } = asset else {
            return None;
        };
        self.currencies.iter().find(|currency| {
            currency.code.as_deref() == Some(code.as_str())
                && currency
                    .issuer
                    .as_deref()
                    .map_or(true, |i| i == issuer.as_str())
        })
    }
}

/// `Some(text)` only for present, non-blank values
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";

    fn document() -> String {
        format!(
            r#"
VERSION = "2.0.0"

[DOCUMENTATION]
ORG_NAME = "Example Anchor Ltd."
ORG_URL = "https://anchor.example.com"
ORG_OFFICIAL_EMAIL = "support@anchor.example.com"

[[CURRENCIES]]
code = "USD"
issuer = "{ISSUER}"
name = "US Dollar"
desc = "Fully backed by USD deposits."
anchor_asset_type = "fiat"
anchor_asset = "USD"

[[CURRENCIES]]
code = "EUR"
issuer = "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W"
"#
        )
    }

    #[test]
    fn test_parse_document() {
        let toml = StellarToml::parse(&document()).unwrap();
        let doc = toml.documentation.as_ref().unwrap();
        assert_eq!(doc.org_name.as_deref(), Some("Example Anchor Ltd."));
        assert_eq!(doc.org_dba, None);
        assert_eq!(toml.currencies.len(), 2);
    }

    #[test]
    fn test_currency_lookup_by_code_and_issuer() {
        let toml = StellarToml::parse(&document()).unwrap();
        let usd = Asset::issued("USD", ISSUER).unwrap();
        assert_eq!(toml.currency_for(&usd).and_then(|c| c.name.as_deref()), Some("US Dollar"));

        let eur_wrong_issuer = Asset::issued("EUR", ISSUER).unwrap();
        assert!(toml.currency_for(&eur_wrong_issuer).is_none());
        assert!(toml.currency_for(&Asset::Native).is_none());
    }

    #[test]
    fn test_empty_and_invalid_documents() {
        let empty = StellarToml::parse("").unwrap();
        assert!(empty.documentation.is_none());
        assert!(empty.currencies.is_empty());
        assert!(StellarToml::parse("[[CURRENCIES]\ncode =").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("  ".into())), None);
        assert_eq!(non_empty(&Some("x".into())), Some("x"));
        assert_eq!(non_empty(&None), None);
    }
}
