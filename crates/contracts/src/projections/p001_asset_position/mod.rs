//! Balance and open offers of one account for one asset.

use crate::domain::a002_asset::Asset;
use crate::domain::a003_account_data::{AccountData, BalanceLine};
use crate::domain::a004_offer::{AccountOffers, Offer};
use crate::shared::decimal::{format_balance_with, BalanceFormat};

/// Shown instead of an empty offer list
pub const NO_OFFERS: &str = "–";

/// First balance line matching `asset`.
///
/// Balance lines are unique per asset on the ledger; a duplicate is reported
/// and the first entry wins.
pub fn find_balance<'a>(balances: &'a [BalanceLine], asset: &Asset) -> Option<&'a BalanceLine> {
    let mut matching = balances.iter().filter(|line| line.matches(asset));
    let first = matching.next();
    if first.is_some() && matching.next().is_some() {
        log::warn!("multiple balance lines match asset {}", asset.id());
    }
    first
}

/// Offers touching an asset, split by side
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenOffers<'a> {
    /// Offers buying the asset
    pub buying: Vec<&'a Offer>,
    /// Offers selling the asset
    pub selling: Vec<&'a Offer>,
}

impl<'a> OpenOffers<'a> {
    /// Display order: buying offers first, then selling offers
    pub fn merged(&self) -> Vec<&'a Offer> {
        self.buying.iter().chain(self.selling.iter()).copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buying.is_empty() && self.selling.is_empty()
    }
}

pub fn open_offers<'a>(offers: &'a [Offer], asset: &Asset) -> OpenOffers<'a> {
    OpenOffers {
        buying: offers.iter().filter(|o| o.buying.matches(asset)).collect(),
        selling: offers.iter().filter(|o| o.selling.matches(asset)).collect(),
    }
}

/// `10 XLM → 25 USD`
pub fn describe_offer(offer: &Offer, format: BalanceFormat) -> String {
    let counter = match offer.counter_amount() {
        Ok(amount) => format_balance_with(&amount, format),
        Err(e) => {
            log::warn!("offer {}: cannot compute counter amount: {}", offer.id, e);
            NO_OFFERS.to_string()
        }
    };
    format!(
        "{} {} → {} {}",
        format_balance_with(&offer.amount, format),
        offer.selling.display_code(),
        counter,
        offer.buying.display_code()
    )
}

/// Text of the "Account balance" and "Open trade offers" fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPosition {
    pub balance: String,
    pub open_offers: String,
}

/// `None` when the account holds no balance line for `asset`
pub fn asset_position(
    data: &AccountData,
    offers: &AccountOffers,
    asset: &Asset,
    format: BalanceFormat,
) -> Option<AssetPosition> {
    let balance = find_balance(&data.balances, asset)?;
    let open = open_offers(&offers.offers, asset);
    let open_offers = if open.is_empty() {
        NO_OFFERS.to_string()
    } else {
        open.merged()
            .into_iter()
            .map(|offer| describe_offer(offer, format))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Some(AssetPosition {
        balance: format!(
            "{} {}",
            format_balance_with(&balance.balance, format),
            asset.code()
        ),
        open_offers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_asset::LedgerAssetRef;

    const ISSUER: &str = "GDNVDG37WMKPEIXSJRBAQAVPO5WGOPKZRZZBPLWXULSX6NQNLNQP6CFF";
    const OTHER: &str = "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";

    fn usd() -> Asset {
        Asset::issued("USD", ISSUER).unwrap()
    }

    fn line(asset: &Asset, amount: &str) -> BalanceLine {
        BalanceLine {
            asset: LedgerAssetRef::from(asset),
            balance: amount.parse().unwrap(),
            buying_liabilities: Default::default(),
            selling_liabilities: Default::default(),
        }
    }

    fn offer(id: &str, selling: &Asset, buying: &Asset, amount: &str, price: &str) -> Offer {
        Offer {
            id: id.into(),
            selling: selling.into(),
            buying: buying.into(),
            amount: amount.parse().unwrap(),
            price: price.parse().unwrap(),
        }
    }

    #[test]
    fn test_find_balance_matches_exact_triple() {
        let usd_other = Asset::issued("USD", OTHER).unwrap();
        let balances = vec![line(&Asset::Native, "5"), line(&usd_other, "1"), line(&usd(), "7")];
        assert_eq!(find_balance(&balances, &usd()).unwrap().balance.to_string(), "7");
        assert_eq!(find_balance(&balances, &Asset::Native).unwrap().balance.to_string(), "5");
        let eur = Asset::issued("EUR", ISSUER).unwrap();
        assert!(find_balance(&balances, &eur).is_none());
    }

    #[test]
    fn test_find_balance_first_duplicate_wins() {
        let balances = vec![line(&usd(), "1"), line(&usd(), "2")];
        assert_eq!(find_balance(&balances, &usd()).unwrap().balance.to_string(), "1");
    }

    #[test]
    fn test_open_offers_partition_and_order() {
        let eur = Asset::issued("EUR", OTHER).unwrap();
        let offers = vec![
            offer("sell-1", &usd(), &Asset::Native, "1", "1"),
            offer("buy-1", &Asset::Native, &usd(), "2", "1"),
            offer("unrelated", &eur, &Asset::Native, "3", "1"),
            offer("buy-2", &eur, &usd(), "4", "1"),
        ];
        let open = open_offers(&offers, &usd());
        assert!(open.buying.iter().all(|o| o.buying.matches(&usd())));
        assert!(open.selling.iter().all(|o| o.selling.matches(&usd())));
        let ids: Vec<&str> = open.merged().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["buy-1", "buy-2", "sell-1"]);
    }

    #[test]
    fn test_describe_offer_uses_exact_counter_amount() {
        let o = offer("1", &Asset::Native, &usd(), "10", "2.5");
        assert_eq!(describe_offer(&o, BalanceFormat::default()), "10 XLM → 25 USD");
        let o = offer("2", &usd(), &Asset::Native, "0.1", "0.2");
        assert_eq!(describe_offer(&o, BalanceFormat::default()), "0.1 USD → 0.02 XLM");
    }

    #[test]
    fn test_asset_position() {
        let mut data = AccountData::unactivated(OTHER);
        data.balances = vec![line(&usd(), "100.5000000")];
        let offers = AccountOffers {
            offers: vec![
                offer("1", &usd(), &Asset::Native, "10", "2.5"),
                offer("2", &Asset::Native, &usd(), "4", "0.5"),
            ],
        };

        let position = asset_position(&data, &offers, &usd(), BalanceFormat::default()).unwrap();
        assert_eq!(position.balance, "100.5 USD");
        assert_eq!(position.open_offers, "4 XLM → 2 USD\n10 USD → 25 XLM");

        let none = asset_position(&data, &AccountOffers::default(), &usd(), BalanceFormat::default())
            .unwrap();
        assert_eq!(none.open_offers, NO_OFFERS);

        assert!(asset_position(&data, &offers, &Asset::Native, BalanceFormat::default()).is_none());
    }
}
