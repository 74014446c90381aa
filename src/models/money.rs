//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums of many small amounts never drift
//! the way binary floating point does. Serialized as a decimal string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;

/// Largest amount, in whole units, a single transaction or budget may carry
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

/// An exact decimal monetary amount
///
/// Addition and subtraction saturate at the bounds of `Decimal` instead of
/// panicking, so a hand-edited data file can never crash a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_units(50000);
    /// assert_eq!(amount.to_string(), "50000");
    /// ```
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from an integer mantissa and a decimal scale
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::new(1050, 2);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    /// Get the underlying decimal
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Magnitude above [`MAX_AMOUNT_UNITS`]
    pub fn exceeds_max(&self) -> bool {
        self.0.abs() > Decimal::from(MAX_AMOUNT_UNITS)
    }

    /// Parse a money amount from user text
    ///
    /// Accepts "10.50", "-10.50", "10", and a comma as the decimal separator
    /// ("10,50"). Surrounding whitespace and `_` digit separators are ignored.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        Decimal::from_str(&cleaned)
            .map(Self)
            .map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.abs().round_dp(2);
        if self.is_negative() {
            format!("-{}{:.2}", symbol, rounded)
        } else {
            format!("{}{:.2}", symbol, rounded)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}
