//! Money value object and the storefront's currency formatter.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Monetary amount in the smallest currency unit (cents).
///
/// The storefront sells in a single currency (Canadian dollars), so the
/// currency is not carried on the value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Amount in major units (dollars), for ratios and comparisons.
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build from a major-unit amount, rounding to the nearest cent.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("amount is too large"));
        }
        Ok(Self(cents as u64))
    }

    /// Parse a user-entered major-unit amount such as `"49.99"`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let amount: f64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("not a number: {raw:?}")))?;
        Self::from_major(amount)
    }

    pub fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Render as the storefront displays prices: `C$1,234.50`.
    pub fn format(self) -> String {
        let dollars = self.0 / 100;
        let cents = self.0 % 100;

        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("C${grouped}.{cents:02}")
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).fold(0u64, u64::saturating_add))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}
