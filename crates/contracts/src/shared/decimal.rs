//! Exact fixed-point decimals for ledger amounts and prices.
//!
//! Amounts arrive from the ledger as strings with up to seven fraction digits,
//! prices may carry more. All arithmetic stays in `i128`, so `0.1 × 0.2` is
//! exactly `0.02` and never picks up binary floating point noise.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound for the scale; `10^MAX_SCALE` must fit into `i128`.
const MAX_SCALE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("invalid decimal literal: {0:?}")]
    Invalid(String),
    #[error("decimal overflow")]
    Overflow,
}

/// Decimal number `mantissa / 10^scale`.
///
/// Values are kept normalized (no trailing zeros in the fraction), so the
/// derived `PartialEq`/`Hash` compare numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
    };

    pub fn from_parts(mantissa: i128, scale: u32) -> Result<Self, DecimalError> {
        let value = Decimal { mantissa, scale }.normalized();
        if value.scale > MAX_SCALE {
            return Err(DecimalError::Overflow);
        }
        Ok(value)
    }

    fn normalized(mut self) -> Self {
        if self.mantissa == 0 {
            return Self::ZERO;
        }
        while self.scale > 0 && self.mantissa % 10 == 0 {
            self.mantissa /= 10;
            self.scale -= 1;
        }
        self
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Brings both operands to the larger scale.
    fn aligned(self, rhs: Decimal) -> Result<(i128, i128, u32), DecimalError> {
        let scale = self.scale.max(rhs.scale);
        let lhs_factor = pow10(scale - self.scale).ok_or(DecimalError::Overflow)?;
        let rhs_factor = pow10(scale - rhs.scale).ok_or(DecimalError::Overflow)?;
        let lhs = self
            .mantissa
            .checked_mul(lhs_factor)
            .ok_or(DecimalError::Overflow)?;
        let rhs = rhs
            .mantissa
            .checked_mul(rhs_factor)
            .ok_or(DecimalError::Overflow)?;
        Ok((lhs, rhs, scale))
    }

    pub fn checked_add(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        let (lhs, rhs, scale) = self.aligned(rhs)?;
        let mantissa = lhs.checked_add(rhs).ok_or(DecimalError::Overflow)?;
        Decimal::from_parts(mantissa, scale)
    }

    pub fn checked_sub(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        let (lhs, rhs, scale) = self.aligned(rhs)?;
        let mantissa = lhs.checked_sub(rhs).ok_or(DecimalError::Overflow)?;
        Decimal::from_parts(mantissa, scale)
    }

    /// Exact product. Fraction digits beyond `MAX_SCALE` are rounded half-up.
    pub fn checked_mul(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        let mantissa = self
            .mantissa
            .checked_mul(rhs.mantissa)
            .ok_or(DecimalError::Overflow)?;
        let product = Decimal {
            mantissa,
            scale: self.scale + rhs.scale,
        }
        .normalized();
        Ok(product.round_dp(MAX_SCALE))
    }

    /// Rounds to at most `dp` fraction digits, ties away from zero.
    pub fn round_dp(self, dp: u32) -> Decimal {
        if self.scale <= dp {
            return self;
        }
        let Some(factor) = pow10(self.scale - dp) else {
            // |mantissa| < 10^39 <= factor, so the value rounds to zero
            return Self::ZERO;
        };
        let mut quotient = self.mantissa / factor;
        let remainder = self.mantissa % factor;
        if remainder.unsigned_abs() * 2 >= factor.unsigned_abs() {
            quotient += self.mantissa.signum();
        }
        Decimal {
            mantissa: quotient,
            scale: dp,
        }
        .normalized()
    }

    pub fn max(self, other: Decimal) -> Decimal {
        if self >= other {
            self
        } else {
            other
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal {
            mantissa: value as i128,
            scale: 0,
        }
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal {
            mantissa: value as i128,
            scale: 0,
        }
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // Integer parts first, then fractions aligned to the common scale.
        // Fractions are below 10^scale, so the alignment cannot overflow.
        let lhs_unit = pow10(self.scale).unwrap_or(1);
        let rhs_unit = pow10(other.scale).unwrap_or(1);
        let by_integer = (self.mantissa / lhs_unit).cmp(&(other.mantissa / rhs_unit));
        if by_integer != Ordering::Equal {
            return by_integer;
        }
        let scale = self.scale.max(other.scale);
        let lhs_frac = (self.mantissa % lhs_unit) * pow10(scale - self.scale).unwrap_or(1);
        let rhs_frac = (other.mantissa % rhs_unit) * pow10(scale - other.scale).unwrap_or(1);
        lhs_frac.cmp(&rhs_frac)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::Invalid(s.to_string());
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let frac = frac_part.trim_end_matches('0');
        if frac.len() > MAX_SCALE as usize {
            return Err(DecimalError::Overflow);
        }

        let mut mantissa: i128 = 0;
        for digit in int_part.bytes().chain(frac.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add((digit - b'0') as i128))
                .ok_or(DecimalError::Overflow)?;
        }
        if negative {
            mantissa = -mantissa;
        }
        Decimal::from_parts(mantissa, frac.len() as u32)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let scale = self.scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Display options for [`format_balance_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceFormat {
    pub max_decimals: u32,
    pub min_decimals: u32,
    pub group_thousands: bool,
}

impl Default for BalanceFormat {
    fn default() -> Self {
        Self {
            max_decimals: 7,
            min_decimals: 0,
            group_thousands: false,
        }
    }
}

/// Formats a ledger amount with the default options (up to 7 decimals,
/// trailing zeros dropped, no grouping).
pub fn format_balance(value: &Decimal) -> String {
    format_balance_with(value, BalanceFormat::default())
}

pub fn format_balance_with(value: &Decimal, format: BalanceFormat) -> String {
    let text = value.round_dp(format.max_decimals).to_string();
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    let int_part = if format.group_thousands {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };
    let mut frac = frac_part.to_string();
    while frac.len() < format.min_decimals as usize {
        frac.push('0');
    }

    if frac.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
