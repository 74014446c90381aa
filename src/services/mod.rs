//! Business logic layer for pocket-ledger
//!
//! [`LedgerService`] owns the live ledger: it validates and applies every
//! change, saves after each one, and answers balance and statistics queries.

pub mod ledger;
pub mod summary;

pub use ledger::{LedgerService, DEFAULT_LOW_BUDGET_PERCENT};
pub use summary::{sorted_by_total, MonthlySummary};
