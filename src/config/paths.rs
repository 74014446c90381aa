//! Path management for pocket-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_LEDGER_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/pocket-ledger` on Linux,
//!    `~/Library/Application Support/pocket-ledger` on macOS,
//!    `%APPDATA%\pocket-ledger\data` on Windows)
//! 3. The current directory, if no home directory can be determined

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "POCKET_LEDGER_DIR";

/// Default name of the ledger data file
pub const DATA_FILE_NAME: &str = "finance_data.json";

/// Manages all paths used by pocket-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment and platform
    pub fn new() -> Self {
        Self {
            base_dir: resolve_base_dir(std::env::var_os(DIR_ENV_VAR)),
        }
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the ledger data file
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base directory if it does not exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty override is treated as unset
fn resolve_base_dir(override_dir: Option<OsString>) -> PathBuf {
    match override_dir {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => resolve_default_path(),
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "pocket-ledger")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
