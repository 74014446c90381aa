//! Ledger service
//!
//! The only code that mutates a [`LedgerState`]. It validates input before
//! touching anything, applies the change in memory, then saves the whole state
//! through its [`Store`] before returning.
//!
//! A failed save is returned as [`LedgerError::Persistence`] but the in-memory
//! change is *not* undone, so the resident state can run ahead of the file.
//! Mutators take `&mut self`; callers sharing a service across threads should
//! hold it behind one lock so "mutate, then persist" stays a single step.

use std::collections::HashMap;

use tracing::{error, info};

use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::models::{
    Budget, BudgetStatus, LedgerState, Money, MonthPeriod, NewTransaction, Transaction,
    TransactionKind,
};
use crate::storage::{JsonStore, Store};

use super::summary::MonthlySummary;

/// Share of the budget (in percent) below which the remainder counts as low
pub const DEFAULT_LOW_BUDGET_PERCENT: u32 = 20;

/// Owns the live ledger for the lifetime of the service
pub struct LedgerService<S: Store = JsonStore> {
    store: S,
    state: LedgerState,
    low_budget_percent: u32,
}

impl<S: Store> LedgerService<S> {
    /// Load the ledger from `store` and take ownership of it
    pub fn open(store: S) -> LedgerResult<Self> {
        let state = store.load()?;
        Ok(Self {
            store,
            state,
            low_budget_percent: DEFAULT_LOW_BUDGET_PERCENT,
        })
    }

    /// Override the "running low" threshold used by [`Self::budget_status`]
    pub fn with_low_budget_percent(mut self, percent: u32) -> Self {
        self.low_budget_percent = percent;
        self
    }

    /// Read-only view of the resident state
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.state).map_err(|e| {
            error!(error = %e, "save failed; in-memory ledger is ahead of storage");
            e
        })
    }

    // ----- Mutations -----

    /// Record a new transaction
    ///
    /// Fails with a validation error, leaving the ledger untouched, when the
    /// amount is not positive or the category is blank.
    pub fn add_transaction(&mut self, input: NewTransaction) -> LedgerResult<Transaction> {
        let txn = Transaction::create(input)?;

        self.state.transactions.push(txn.clone());
        self.persist()?;

        Ok(txn)
    }

    /// Replace the current budget with a new one for `period`
    pub fn set_budget(
        &mut self,
        monthly_limit: Money,
        period: MonthPeriod,
    ) -> LedgerResult<Budget> {
        let budget = Budget::new(monthly_limit, period)?;

        if self.state.current_budget.is_set() {
            info!(previous = %self.state.current_budget, new = %budget, "replacing budget");
        }
        self.state.current_budget = budget;
        self.persist()?;

        Ok(budget)
    }

    /// Add a user-defined category label
    ///
    /// Returns `false` without saving if the exact label is already present.
    pub fn add_custom_category(&mut self, label: &str) -> LedgerResult<bool> {
        if label.trim().is_empty() {
            return Err(LedgerError::Validation(ValidationError::BlankCategory));
        }
        if self.state.has_custom_category(label) {
            return Ok(false);
        }

        self.state.custom_categories.push(label.to_string());
        self.persist()?;

        Ok(true)
    }

    // ----- Queries -----

    /// Income minus expenses over the whole ledger
    pub fn calculate_balance(&self) -> Money {
        self.state
            .transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// All transactions, most recent first
    ///
    /// Equal timestamps are ordered most-recently-inserted first.
    pub fn all_transactions(&self) -> Vec<&Transaction> {
        newest_first(self.state.transactions.iter())
    }

    /// Transactions recorded in `period`, most recent first
    pub fn transactions_by_month(&self, period: MonthPeriod) -> Vec<&Transaction> {
        newest_first(
            self.state
                .transactions
                .iter()
                .filter(|t| period.contains(&t.timestamp)),
        )
    }

    /// Sum of amounts per category for one kind of transaction in `period`
    ///
    /// Categories without matching transactions are absent. The map has no
    /// meaningful iteration order; see [`super::summary::sorted_by_total`].
    pub fn category_statistics(
        &self,
        period: MonthPeriod,
        kind: TransactionKind,
    ) -> HashMap<String, Money> {
        let mut totals: HashMap<String, Money> = HashMap::new();

        for txn in self
            .state
            .transactions
            .iter()
            .filter(|t| t.kind == kind && period.contains(&t.timestamp))
        {
            *totals.entry(txn.category.clone()).or_default() += txn.amount;
        }

        totals
    }

    /// The current budget, or `None` if one was never set
    pub fn current_budget(&self) -> Option<Budget> {
        Some(self.state.current_budget).filter(Budget::is_set)
    }

    /// User-defined categories in insertion order
    pub fn custom_categories(&self) -> &[String] {
        &self.state.custom_categories
    }

    /// Spending in `period` measured against the current budget
    ///
    /// `None` if no budget is set or the budget belongs to another month.
    pub fn budget_status(&self, period: MonthPeriod) -> Option<BudgetStatus> {
        let budget = self.current_budget().filter(|b| b.applies_to(period))?;

        let spent: Money = self
            .category_statistics(period, TransactionKind::Expense)
            .values()
            .sum();

        Some(budget.status(spent, self.low_budget_percent))
    }

    /// Income, expenses and budget standing for one month
    pub fn monthly_summary(&self, period: MonthPeriod) -> MonthlySummary {
        MonthlySummary {
            period,
            income: self.category_statistics(period, TransactionKind::Income),
            expenses: self.category_statistics(period, TransactionKind::Expense),
            balance: self.calculate_balance(),
            budget: self.budget_status(period),
        }
    }
}

/// Sort by timestamp descending, newest insertion first among equal timestamps
fn newest_first<'a, I>(transactions: I) -> Vec<&'a Transaction>
where
    I: DoubleEndedIterator<Item = &'a Transaction>,
{
    // Reversed insertion order plus a stable sort settles ties
    let mut sorted: Vec<&Transaction> = transactions.rev().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}
