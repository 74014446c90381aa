//! pocket-ledger - a single-user personal ledger
//!
//! Records income and expense transactions, derives a running balance,
//! aggregates amounts by category and calendar month, and tracks one monthly
//! spending limit. The whole ledger lives in a single JSON file.
//!
//! # Architecture
//!
//! - `models`: transactions, budget, and the `LedgerState` aggregate
//! - `storage`: whole-file JSON persistence behind the `Store` trait
//! - `services`: `LedgerService`, the only mutator of ledger state
//! - `config`: path resolution and user settings
//! - `display` / `cli`: the `ledger` command-line front-end
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket_ledger::models::{Money, NewTransaction};
//! use pocket_ledger::services::LedgerService;
//! use pocket_ledger::storage::JsonStore;
//!
//! # fn main() -> pocket_ledger::LedgerResult<()> {
//! let mut ledger = LedgerService::open(JsonStore::new("finance_data.json"))?;
//! ledger.add_transaction(NewTransaction::income("Salary", Money::from_units(50000)))?;
//! ledger.add_transaction(NewTransaction::expense("Food", Money::from_units(5000)))?;
//! assert_eq!(ledger.calculate_balance(), Money::from_units(45000));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult, ValidationError};
pub use services::LedgerService;
