//! Calendar month periods
//!
//! Statistics and budgets are keyed by a (month, year) pair. `MonthPeriod`
//! validates the pair once so the rest of the crate can trust it.

use chrono::{Datelike, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A validated calendar month (month 1-12, year 1-9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period, rejecting out-of-range months and years
    pub fn new(month: u32, year: i32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(ValidationError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing the current local time
    pub fn current() -> Self {
        Self::of(&Local::now().naive_local())
    }

    /// The month containing the given timestamp
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Check if a timestamp falls within this calendar month
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        timestamp.year() == self.year && timestamp.month() == self.month
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthPeriod {
    type Err = ValidationError;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidPeriod(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(MonthPeriod::new(1, 2025).is_ok());
        assert!(MonthPeriod::new(12, 2025).is_ok());
        assert_eq!(
            MonthPeriod::new(0, 2025),
            Err(ValidationError::InvalidMonth(0))
        );
        assert_eq!(
            MonthPeriod::new(13, 2025),
            Err(ValidationError::InvalidMonth(13))
        );
        assert_eq!(
            MonthPeriod::new(1, 0),
            Err(ValidationError::InvalidYear(0))
        );
    }

    #[test]
    fn test_contains_matches_month_and_year() {
        let december = MonthPeriod::new(12, 2024).unwrap();
        assert!(december.contains(&at(2024, 12, 1)));
        assert!(december.contains(&at(2024, 12, 31)));
        assert!(!december.contains(&at(2025, 1, 1)));
        assert!(!december.contains(&at(2023, 12, 5)));
    }

    #[test]
    fn test_of_timestamp() {
        let period = MonthPeriod::of(&at(2025, 1, 12));
        assert_eq!(period.month(), 1);
        assert_eq!(period.year(), 2025);
    }

    #[test]
    fn test_display_and_parse() {
        let period = MonthPeriod::new(3, 2025).unwrap();
        assert_eq!(period.to_string(), "2025-03");
        assert_eq!("2025-03".parse::<MonthPeriod>().unwrap(), period);
        assert_eq!("2025-3".parse::<MonthPeriod>().unwrap(), period);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "March".parse::<MonthPeriod>(),
            Err(ValidationError::InvalidPeriod(_))
        ));
        assert!(matches!(
            "2025-13".parse::<MonthPeriod>(),
            Err(ValidationError::InvalidMonth(13))
        ));
    }
}
