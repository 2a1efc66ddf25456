use crate::domain::a002_asset::LedgerAssetRef;
use crate::shared::decimal::{Decimal, DecimalError};
use serde::{Deserialize, Serialize};

/// Standing order selling `amount` of `selling` at `price` units of `buying` each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub selling: LedgerAssetRef,
    pub buying: LedgerAssetRef,
    pub amount: Decimal,
    pub price: Decimal,
}

impl Offer {
    /// Amount of the buying asset received when the offer fills completely
    pub fn counter_amount(&self) -> Result<Decimal, DecimalError> {
        self.amount.checked_mul(self.price)
    }
}

/// Open offers of one account, as delivered by the live offers subscription
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountOffers {
    pub offers: Vec<Offer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_amount_is_exact() {
        let offer = Offer {
            id: "1".into(),
            selling: LedgerAssetRef::native(),
            buying: LedgerAssetRef::native(),
            amount: "0.1".parse().unwrap(),
            price: "0.2".parse().unwrap(),
        };
        assert_eq!(offer.counter_amount().unwrap().to_string(), "0.02");
    }

    #[test]
    fn test_offer_deserializes_from_ledger_json() {
        let json = r#"{
            "id": "12345",
            "selling": { "asset_type": "native" },
            "buying": {
                "asset_type": "credit_alphanum4",
                "asset_code": "USD",
                "asset_issuer": "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF"
            },
            "amount": "10.0000000",
            "price": "2.5000000"
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.buying.display_code(), "USD");
        assert_eq!(offer.counter_amount().unwrap().to_string(), "25");
    }
}
