//! Spendable balance of the native asset: raw balance minus reserves and
//! selling liabilities.

use crate::domain::a002_asset::Asset;
use crate::domain::a003_account_data::AccountData;
use crate::shared::decimal::{format_balance_with, BalanceFormat, Decimal, DecimalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendableBreakdown {
    pub raw_balance: Decimal,
    pub base_reserve: Decimal,
    pub subentry_reserve: Decimal,
    pub selling_liabilities: Decimal,
    pub spendable: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Balance,
    Deduction,
    Total,
}

/// Label/value line of the breakdown table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub value: String,
    pub kind: RowKind,
}

impl SpendableBreakdown {
    pub fn compute(data: &AccountData, base_reserve: Decimal) -> Result<Self, DecimalError> {
        let native = data.balances.iter().find(|line| line.matches(&Asset::Native));
        let raw_balance = native.map(|line| line.balance).unwrap_or_default();
        let selling_liabilities = native
            .map(|line| line.selling_liabilities)
            .unwrap_or_default();

        let account_reserve = Decimal::from(2u32).checked_mul(base_reserve)?;
        let subentry_reserve = Decimal::from(data.subentry_count).checked_mul(base_reserve)?;

        let spendable = raw_balance
            .checked_sub(account_reserve)?
            .checked_sub(subentry_reserve)?
            .checked_sub(selling_liabilities)?
            .max(Decimal::ZERO);

        Ok(Self {
            raw_balance,
            base_reserve: account_reserve,
            subentry_reserve,
            selling_liabilities,
            spendable,
        })
    }

    pub fn rows(&self, format: BalanceFormat) -> Vec<BreakdownRow> {
        let row = |label, value: &Decimal, kind| BreakdownRow {
            label,
            value: format!("{} XLM", format_balance_with(value, format)),
            kind,
        };
        vec![
            row("Raw balance", &self.raw_balance, RowKind::Balance),
            row("Base reserve", &self.base_reserve, RowKind::Deduction),
            row("Subentry reserve", &self.subentry_reserve, RowKind::Deduction),
            row("Selling liabilities", &self.selling_liabilities, RowKind::Deduction),
            row("Spendable balance", &self.spendable, RowKind::Total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_asset::LedgerAssetRef;
    use crate::domain::a003_account_data::BalanceLine;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn account(balance: &str, selling: &str, subentries: u32) -> AccountData {
        let mut data = AccountData::unactivated("GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W");
        data.activated = true;
        data.subentry_count = subentries;
        data.balances.push(BalanceLine {
            asset: LedgerAssetRef::native(),
            balance: dec(balance),
            buying_liabilities: Decimal::ZERO,
            selling_liabilities: dec(selling),
        });
        data
    }

    #[test]
    fn test_breakdown_arithmetic() {
        let breakdown = SpendableBreakdown::compute(&account("42", "10", 3), dec("0.5")).unwrap();
        assert_eq!(breakdown.base_reserve, dec("1"));
        assert_eq!(breakdown.subentry_reserve, dec("1.5"));
        assert_eq!(breakdown.spendable, dec("29.5"));
    }

    #[test]
    fn test_spendable_never_negative() {
        let breakdown = SpendableBreakdown::compute(&account("1.2", "0", 4), dec("0.5")).unwrap();
        assert_eq!(breakdown.spendable, Decimal::ZERO);

        let empty = AccountData::unactivated("GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W");
        let breakdown = SpendableBreakdown::compute(&empty, dec("0.5")).unwrap();
        assert!(breakdown.raw_balance.is_zero());
        assert!(breakdown.spendable.is_zero());
    }

    #[test]
    fn test_rows() {
        let breakdown = SpendableBreakdown::compute(&account("42", "10", 3), dec("0.5")).unwrap();
        let rows = breakdown.rows(BalanceFormat::default());
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Raw balance",
                "Base reserve",
                "Subentry reserve",
                "Selling liabilities",
                "Spendable balance",
            ]
        );
        assert_eq!(rows[0].value, "42 XLM");
        assert_eq!(rows[4].value, "29.5 XLM");
        assert_eq!(rows[1].kind, RowKind::Deduction);
        assert_eq!(rows[4].kind, RowKind::Total);
    }
}
