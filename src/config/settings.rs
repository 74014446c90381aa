//! User settings for pocket-ledger
//!
//! Settings live next to the data file in `config.json`. Unlike the ledger
//! itself, a malformed settings file is reported rather than replaced.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::services::DEFAULT_LOW_BUDGET_PERCENT;

/// User settings for pocket-ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Overrides the default data file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Symbol shown next to amounts
    pub currency_symbol: String,

    /// Rows shown by `history` when no limit is given
    pub history_limit: usize,

    /// Remaining budget below this share of the limit is flagged as low
    pub low_budget_threshold_percent: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            data_file: None,
            currency_symbol: "$".to_string(),
            history_limit: 20,
            low_budget_threshold_percent: DEFAULT_LOW_BUDGET_PERCENT,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;

        Ok(())
    }

    /// The data file to use: the settings override, else the default location
    pub fn data_file(&self, paths: &LedgerPaths) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| paths.data_file())
    }
}
