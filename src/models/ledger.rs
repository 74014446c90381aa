//! The ledger aggregate root
//!
//! `LedgerState` is always loaded and saved as one unit. Missing fields
//! deserialize to their empty defaults, so `{}` is a valid, empty ledger.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::transaction::Transaction;

/// Everything the ledger persists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerState {
    /// In insertion order
    pub transactions: Vec<Transaction>,

    /// User-defined labels, deduplicated by exact match, in insertion order
    pub custom_categories: Vec<String>,

    pub current_budget: Budget,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership test
    pub fn has_custom_category(&self, label: &str) -> bool {
        self.custom_categories.iter().any(|c| c == label)
    }
}
