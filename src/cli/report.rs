//! Reporting CLI commands: balance, statistics and monthly summary

use crate::config::Settings;
use crate::display::{format_statistics, format_summary};
use crate::error::LedgerResult;
use crate::models::{MonthPeriod, TransactionKind};
use crate::services::LedgerService;

pub fn handle_balance(service: &LedgerService, settings: &Settings) -> LedgerResult<()> {
    println!(
        "Balance: {}",
        service
            .calculate_balance()
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Per-category totals for one month; both kinds unless `kind` is given
pub fn handle_stats(
    service: &LedgerService,
    settings: &Settings,
    month: Option<MonthPeriod>,
    kind: Option<TransactionKind>,
) -> LedgerResult<()> {
    let period = month.unwrap_or_else(MonthPeriod::current);
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec![TransactionKind::Income, TransactionKind::Expense],
    };

    println!("Statistics for {}", period);
    for kind in kinds {
        let totals = service.category_statistics(period, kind);
        println!();
        print!(
            "{}",
            format_statistics(&kind.to_string(), &totals, &settings.currency_symbol)
        );
    }

    Ok(())
}

pub fn handle_summary(
    service: &LedgerService,
    settings: &Settings,
    month: Option<MonthPeriod>,
) -> LedgerResult<()> {
    let period = month.unwrap_or_else(MonthPeriod::current);
    let summary = service.monthly_summary(period);
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
