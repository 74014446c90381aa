//! Terminal formatting for ledger data
//!
//! Plain-text renderers used by the CLI. Nothing here affects ledger state.

use std::collections::HashMap;

use crate::models::{Budget, BudgetLevel, BudgetStatus, Money, Transaction, TransactionKind};
use crate::services::{sorted_by_total, MonthlySummary};

/// Format a single transaction for display (history row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{:16}  {:7}  {:20}  {:>14}  {}",
        txn.timestamp.format("%Y-%m-%d %H:%M"),
        txn.kind.to_string(),
        truncate(&txn.category, 20),
        format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
        txn.description
    )
    .trim_end()
    .to_string()
}

/// Format transactions as a history table, showing at most `limit` rows
pub fn format_history(transactions: &[&Transaction], limit: usize, symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16}  {:7}  {:20}  {:>14}  {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions.iter().take(limit) {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    if transactions.len() > limit {
        output.push_str(&format!(
            "... and {} more\n",
            transactions.len() - limit
        ));
    }

    output
}

/// Format per-category totals, largest first, with a total line
pub fn format_statistics(title: &str, totals: &HashMap<String, Money>, symbol: &str) -> String {
    let mut output = format!("{}:\n", title);

    if totals.is_empty() {
        output.push_str("  (none for this period)\n");
        return output;
    }

    for (category, amount) in sorted_by_total(totals) {
        output.push_str(&format!(
            "  {:25} {:>14}\n",
            truncate(category, 25),
            amount.format_with_symbol(symbol)
        ));
    }

    let total: Money = totals.values().sum();
    output.push_str(&format!(
        "  {:25} {:>14}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));
    output
}

/// Format the current budget record
pub fn format_budget(budget: Option<Budget>, symbol: &str) -> String {
    match budget.and_then(|b| b.period().map(|p| (b, p))) {
        Some((budget, period)) => format!(
            "Budget for {}: {}\n",
            period,
            budget.monthly_limit.format_with_symbol(symbol)
        ),
        None => "No budget set.\n".to_string(),
    }
}

/// Format spending against the budget
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Limit:     {}\n",
        status.limit.format_with_symbol(symbol)
    ));
    match status.percent_used {
        Some(percent) => output.push_str(&format!(
            "Spent:     {} ({}%)\n",
            status.spent.format_with_symbol(symbol),
            percent.round_dp(1)
        )),
        None => output.push_str(&format!(
            "Spent:     {}\n",
            status.spent.format_with_symbol(symbol)
        )),
    }
    output.push_str(&format!(
        "Remaining: {}\n",
        status.remaining.format_with_symbol(symbol)
    ));

    match status.level {
        BudgetLevel::Exceeded => output.push_str("Budget exceeded!\n"),
        BudgetLevel::Low => output.push_str("Budget is running low.\n"),
        BudgetLevel::Ok => {}
    }

    output
}

/// Format a monthly summary report
pub fn format_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = format!("Summary for {}\n\n", summary.period);

    output.push_str(&format_statistics("Income", &summary.income, symbol));
    output.push('\n');
    output.push_str(&format_statistics("Expenses", &summary.expenses, symbol));

    if let Some((category, amount)) = summary.top_expense() {
        output.push_str(&format!(
            "\nLargest expense: {} ({})\n",
            category,
            amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!(
        "\nNet this month:  {}\n",
        summary.net().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:         {}\n",
        summary.balance.format_with_symbol(symbol)
    ));

    if let Some(status) = &summary.budget {
        output.push('\n');
        output.push_str(&format_budget_status(status, symbol));
    }

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthPeriod, NewTransaction};
    use chrono::NaiveDate;

    fn sample(kind: TransactionKind, category: &str, amount: i64) -> Transaction {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 12)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        Transaction::create(
            NewTransaction::new(kind, category, Money::from_units(amount))
                .description("note")
                .at(ts),
        )
        .unwrap()
    }

    #[test]
    fn test_transaction_row() {
        let txn = sample(TransactionKind::Expense, "Food", 5000);
        let row = format_transaction_row(&txn, "$");

        assert!(row.starts_with("2025-01-12 14:30"));
        assert!(row.contains("Expense"));
        assert!(row.contains("-$5000.00"));
        assert!(row.ends_with("note"));
    }

    #[test]
    fn test_history_limit() {
        let a = sample(TransactionKind::Income, "Salary", 1);
        let b = sample(TransactionKind::Expense, "Food", 1);
        let c = sample(TransactionKind::Expense, "Rent", 1);

        let output = format_history(&[&a, &b, &c], 2, "$");
        assert!(output.contains("Salary"));
        assert!(output.contains("Food"));
        assert!(!output.contains("Rent"));
        assert!(output.contains("... and 1 more"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[], 20, "$"), "No transactions found.\n");
    }

    #[test]
    fn test_statistics_sorted_with_total() {
        let mut totals = HashMap::new();
        totals.insert("Food".to_string(), Money::from_units(100));
        totals.insert("Rent".to_string(), Money::from_units(900));

        let output = format_statistics("Expenses", &totals, "$");
        let rent = output.find("Rent").unwrap();
        let food = output.find("Food").unwrap();
        assert!(rent < food);
        assert!(output.contains("$1000.00"));
    }

    #[test]
    fn test_budget_formatting() {
        assert_eq!(format_budget(None, "$"), "No budget set.\n");

        let period = MonthPeriod::new(1, 2025).unwrap();
        let budget = Budget::new(Money::from_units(10000), period).unwrap();
        assert_eq!(
            format_budget(Some(budget), "$"),
            "Budget for 2025-01: $10000.00\n"
        );

        let status = budget.status(Money::from_units(12000), 20);
        let output = format_budget_status(&status, "$");
        assert!(output.contains("Remaining: -$2000.00"));
        assert!(output.contains("Budget exceeded!"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Entertainment", 6), "Enter…");
    }
}
