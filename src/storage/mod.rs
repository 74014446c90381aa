//! Storage layer for pocket-ledger
//!
//! A [`Store`] loads and saves the whole [`LedgerState`] as one unit. It knows
//! nothing about business rules and keeps no state between calls.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic, ReadOutcome};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::LedgerState;

/// Whole-snapshot persistence for the ledger
pub trait Store {
    /// Load the ledger, or an empty one if nothing usable is stored
    fn load(&self) -> LedgerResult<LedgerState>;

    /// Replace whatever is stored with `state`
    fn save(&self, state: &LedgerState) -> LedgerResult<()>;
}

/// Stores the ledger as a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonStore {
    /// Missing and malformed files both yield an empty ledger
    ///
    /// Corruption is recovered silently on purpose: the caller gets a fresh,
    /// usable ledger and only a warning is logged. The next save overwrites
    /// the unreadable file. Read errors on an existing file (permissions and
    /// the like) are not covered by this and are returned.
    fn load(&self) -> LedgerResult<LedgerState> {
        match read_json::<LedgerState, _>(&self.path)? {
            ReadOutcome::Missing => {
                debug!(path = %self.path.display(), "no data file, starting empty ledger");
                Ok(LedgerState::default())
            }
            ReadOutcome::Parsed(state) => {
                debug!(
                    path = %self.path.display(),
                    transactions = state.transactions.len(),
                    "loaded ledger"
                );
                Ok(state)
            }
            ReadOutcome::Malformed(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file is malformed, starting with an empty ledger"
                );
                Ok(LedgerState::default())
            }
        }
    }

    fn save(&self, state: &LedgerState) -> LedgerResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(
            path = %self.path.display(),
            transactions = state.transactions.len(),
            "saved ledger"
        );
        Ok(())
    }
}
