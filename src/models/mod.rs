//! Core data models for pocket-ledger
//!
//! Transactions, the single monthly budget, and the `LedgerState` aggregate
//! that holds them.

pub mod budget;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetLevel, BudgetStatus};
pub use ids::TransactionId;
pub use ledger::LedgerState;
pub use money::{Money, MAX_AMOUNT_UNITS};
pub use period::MonthPeriod;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
