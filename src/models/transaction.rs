//! Transaction model
//!
//! A transaction records one income or expense event. Its invariants (positive
//! amount, non-blank category) are checked once, in [`Transaction::create`];
//! after that the record is immutable and trusted.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::ValidationError;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The amount's contribution to the balance
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction kind '{}'", other)),
        }
    }
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
    /// Defaults to the current local time when `None`
    pub timestamp: Option<NaiveDateTime>,
}

impl NewTransaction {
    pub fn new(kind: TransactionKind, category: impl Into<String>, amount: Money) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            description: None,
            timestamp: None,
        }
    }

    pub fn income(category: impl Into<String>, amount: Money) -> Self {
        Self::new(TransactionKind::Income, category, amount)
    }

    pub fn expense(category: impl Into<String>, amount: Money) -> Self {
        Self::new(TransactionKind::Expense, category, amount)
    }

    /// Attach a free-form description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Record the transaction at a specific local date-time
    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub kind: TransactionKind,

    pub category: String,

    /// Always strictly positive; the kind carries the sign
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// Local wall-clock time the transaction was recorded
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Validate the input and build a transaction with a fresh ID
    pub fn create(input: NewTransaction) -> Result<Self, ValidationError> {
        if !input.amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if input.amount.exceeds_max() {
            return Err(ValidationError::AmountTooLarge);
        }
        if input.category.trim().is_empty() {
            return Err(ValidationError::BlankCategory);
        }

        Ok(Self {
            id: TransactionId::new(),
            kind: input.kind,
            category: input.category,
            amount: input.amount,
            description: input.description.unwrap_or_default(),
            timestamp: input
                .timestamp
                .unwrap_or_else(|| Local::now().naive_local()),
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount's contribution to the balance (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.category,
            self.signed_amount()
        )
    }
}
