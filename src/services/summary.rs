//! Monthly rollup of income, expenses and budget standing

use std::collections::HashMap;

use crate::models::{BudgetStatus, Money, MonthPeriod};

/// Everything a front-end needs to show one month at a glance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    /// Income totals per category
    pub income: HashMap<String, Money>,
    /// Expense totals per category
    pub expenses: HashMap<String, Money>,
    /// Balance over the whole ledger, not just this month
    pub balance: Money,
    /// `None` when the current budget does not cover this month
    pub budget: Option<BudgetStatus>,
}

impl MonthlySummary {
    pub fn total_income(&self) -> Money {
        self.income.values().sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.values().sum()
    }

    /// Income minus expenses for this month only
    pub fn net(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Category with the largest expense total
    pub fn top_expense(&self) -> Option<(&str, Money)> {
        sorted_by_total(&self.expenses).into_iter().next()
    }
}

/// Category totals ordered by amount descending, then by name
pub fn sorted_by_total(totals: &HashMap<String, Money>) -> Vec<(&str, Money)> {
    let mut sorted: Vec<(&str, Money)> = totals
        .iter()
        .map(|(category, amount)| (category.as_str(), *amount))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted
}
