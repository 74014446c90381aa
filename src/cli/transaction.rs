//! Transaction CLI commands
//!
//! Recording income and expenses, and listing history.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;

use crate::config::Settings;
use crate::display::format_history;
use crate::error::LedgerResult;
use crate::models::{Money, MonthPeriod, NewTransaction, TransactionKind};
use crate::services::LedgerService;

/// Arguments for `ledger add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// "income" or "expense"
    pub kind: TransactionKind,

    /// Category label (e.g., "Salary", "Food")
    pub category: String,

    /// Amount (e.g., "5000" or "12.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: Money,

    /// Free-form description
    #[arg(short, long)]
    pub description: Option<String>,

    /// When it happened (YYYY-MM-DD or "YYYY-MM-DD HH:MM"); defaults to now
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<NaiveDateTime>,
}

/// Record a transaction and print the new balance
pub fn handle_add(
    service: &mut LedgerService,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let mut input = NewTransaction::new(args.kind, args.category, args.amount);
    if let Some(description) = args.description {
        input = input.description(description);
    }
    if let Some(at) = args.at {
        input = input.at(at);
    }

    let txn = service.add_transaction(input)?;

    println!(
        "Added {} '{}' {} ({})",
        txn.kind.to_string().to_lowercase(),
        txn.category,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.id
    );
    println!(
        "Balance: {}",
        service
            .calculate_balance()
            .format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

/// List transactions, newest first
pub fn handle_history(
    service: &LedgerService,
    settings: &Settings,
    month: Option<MonthPeriod>,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let transactions = match month {
        Some(period) => service.transactions_by_month(period),
        None => service.all_transactions(),
    };

    let limit = limit.unwrap_or(settings.history_limit);
    print!(
        "{}",
        format_history(&transactions, limit, &settings.currency_symbol)
    );

    Ok(())
}

/// Parse "YYYY-MM-DD", "YYYY-MM-DD HH:MM" or "YYYY-MM-DDTHH:MM[:SS]"
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();

    for format in [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ts);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD [HH:MM]", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 12)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2025-01-12 08:30").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-12T08:30").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-12T08:30:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let ts = parse_timestamp("2024-12-05").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 12, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2025-13-01").is_err());
    }
}
