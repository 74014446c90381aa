//! Error types for pocket-ledger
//!
//! Two failure kinds matter to callers: the input was rejected before anything
//! changed ([`LedgerError::Validation`]), or the input was accepted but the ledger
//! could not be written ([`LedgerError::Persistence`]).

use thiserror::Error;

/// A precondition on caller-supplied input was violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("category must not be empty")]
    BlankCategory,

    #[error("budget must not be negative")]
    NegativeBudget,

    #[error("amount must not exceed {}", crate::models::MAX_AMOUNT_UNITS)]
    AmountTooLarge,

    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("year must be between 1 and 9999, got {0}")]
    InvalidYear(i32),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid period '{0}', expected YYYY-MM")]
    InvalidPeriod(String),
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Input rejected; nothing was mutated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The data file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the data file
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// The violated rule, if this is a validation error
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
