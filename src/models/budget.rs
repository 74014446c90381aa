//! Monthly budget model
//!
//! The ledger keeps a single "current" budget. A new one replaces the old one
//! outright; no history is retained. An all-zero record is the unset sentinel,
//! which keeps the persisted layout a plain record rather than `null`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthPeriod;
use crate::error::ValidationError;

/// A spending limit for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_limit: Money,

    /// 1-12, or 0 when the budget has never been set
    pub month: u32,

    pub year: i32,
}

impl Budget {
    /// Create a budget for a period, rejecting negative limits
    pub fn new(monthly_limit: Money, period: MonthPeriod) -> Result<Self, ValidationError> {
        if monthly_limit.is_negative() {
            return Err(ValidationError::NegativeBudget);
        }
        if monthly_limit.exceeds_max() {
            return Err(ValidationError::AmountTooLarge);
        }

        Ok(Self {
            monthly_limit,
            month: period.month(),
            year: period.year(),
        })
    }

    /// The "never set" sentinel
    pub fn unset() -> Self {
        Self::default()
    }

    /// Set to a valid month; a loaded record with an out-of-range month or
    /// year counts as unset
    pub fn is_set(&self) -> bool {
        self.period().is_some()
    }

    /// The period this budget applies to, if it has been set
    pub fn period(&self) -> Option<MonthPeriod> {
        MonthPeriod::new(self.month, self.year).ok()
    }

    /// Check if this budget covers the given month
    pub fn applies_to(&self, period: MonthPeriod) -> bool {
        self.period() == Some(period)
    }

    /// Compare spending in the budget's month against the limit
    ///
    /// `low_threshold_percent` is the share of the limit below which the
    /// remaining amount counts as running low. `percent_used` is `None` for a
    /// zero limit or when the ratio does not fit in a `Decimal`.
    pub fn status(&self, spent: Money, low_threshold_percent: u32) -> BudgetStatus {
        let limit = self.monthly_limit;
        let remaining = limit - spent;

        let percent_used = if limit.is_zero() {
            None
        } else {
            spent
                .as_decimal()
                .checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.checked_div(limit.as_decimal()))
        };

        let low_line = (limit.as_decimal() / Decimal::ONE_HUNDRED)
            .checked_mul(Decimal::from(low_threshold_percent))
            .unwrap_or(Decimal::MAX);

        let level = if spent > limit {
            BudgetLevel::Exceeded
        } else if remaining.as_decimal() < low_line {
            BudgetLevel::Low
        } else {
            BudgetLevel::Ok
        };

        BudgetStatus {
            limit,
            spent,
            remaining,
            percent_used,
            level,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period() {
            Some(period) => write!(f, "{} for {}", self.monthly_limit, period),
            None => write!(f, "not set"),
        }
    }
}

/// How close spending is to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    Ok,
    /// Less than the configured share of the limit remains
    Low,
    /// Spending is above the limit
    Exceeded,
}

/// Spending in a month measured against its budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative once the budget is exceeded
    pub remaining: Money,
    /// `None` for a zero limit
    pub percent_used: Option<Decimal>,
    pub level: BudgetLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_AMOUNT_UNITS;

    fn january() -> MonthPeriod {
        MonthPeriod::new(1, 2025).unwrap()
    }

    #[test]
    fn test_default_is_unset() {
        let budget = Budget::unset();
        assert!(!budget.is_set());
        assert_eq!(budget.period(), None);
        assert!(!budget.applies_to(january()));
        assert_eq!(budget.to_string(), "not set");
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(Money::from_units(30000), january()).unwrap();
        assert!(budget.is_set());
        assert_eq!(budget.monthly_limit, Money::from_units(30000));
        assert_eq!(budget.month, 1);
        assert_eq!(budget.year, 2025);
        assert!(budget.applies_to(january()));
        assert!(!budget.applies_to(MonthPeriod::new(2, 2025).unwrap()));
    }

    #[test]
    fn test_zero_budget_is_allowed() {
        let budget = Budget::new(Money::zero(), january()).unwrap();
        assert!(budget.is_set());
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert_eq!(
            Budget::new(Money::from_units(-1), january()),
            Err(ValidationError::NegativeBudget)
        );
    }

    #[test]
    fn test_status_within_budget() {
        let budget = Budget::new(Money::from_units(10000), january()).unwrap();
        let status = budget.status(Money::from_units(5000), 20);

        assert_eq!(status.remaining, Money::from_units(5000));
        assert_eq!(status.percent_used, Some(Decimal::from(50)));
        assert_eq!(status.level, BudgetLevel::Ok);
    }

    #[test]
    fn test_status_running_low() {
        let budget = Budget::new(Money::from_units(10000), january()).unwrap();
        let status = budget.status(Money::from_units(8500), 20);

        assert_eq!(status.remaining, Money::from_units(1500));
        assert_eq!(status.level, BudgetLevel::Low);
    }

    #[test]
    fn test_status_exceeded() {
        let budget = Budget::new(Money::from_units(10000), january()).unwrap();
        let status = budget.status(Money::from_units(12000), 20);

        assert_eq!(status.remaining, Money::from_units(-2000));
        assert_eq!(status.level, BudgetLevel::Exceeded);
    }

    #[test]
    fn test_oversized_budget_rejected() {
        let huge = Money::from_units(MAX_AMOUNT_UNITS + 1);
        assert_eq!(
            Budget::new(huge, january()),
            Err(ValidationError::AmountTooLarge)
        );
    }

    #[test]
    fn test_status_with_huge_spending_does_not_panic() {
        let budget = Budget::new(Money::from_units(1), january()).unwrap();
        let spent = Money::parse("1000000000000000000000000000").unwrap();

        let status = budget.status(spent, 20);
        assert_eq!(status.percent_used, None);
        assert_eq!(status.level, BudgetLevel::Exceeded);

        let maxed = budget.status(Money::from(Decimal::MAX), 20);
        assert_eq!(maxed.level, BudgetLevel::Exceeded);
    }

    #[test]
    fn test_out_of_range_year_counts_as_unset() {
        let loaded: Budget =
            serde_json::from_str(r#"{"monthly_limit":"100","month":5,"year":0}"#).unwrap();
        assert!(!loaded.is_set());
        assert_eq!(loaded.period(), None);
        assert_eq!(loaded.to_string(), "not set");
    }

    #[test]
    fn test_status_zero_limit() {
        let budget = Budget::new(Money::zero(), january()).unwrap();

        let untouched = budget.status(Money::zero(), 20);
        assert_eq!(untouched.percent_used, None);
        assert_eq!(untouched.level, BudgetLevel::Ok);

        let spent = budget.status(Money::from_units(1), 20);
        assert_eq!(spent.level, BudgetLevel::Exceeded);
    }
}
