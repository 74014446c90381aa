//! File I/O utilities with atomic writes
//!
//! Reads report *why* a document could not be produced (absent vs. malformed)
//! so callers can pick their own recovery policy. Writes never leave a
//! half-written file behind.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Result of reading a JSON document from disk
#[derive(Debug)]
pub enum ReadOutcome<T> {
    /// No file at the path
    Missing,
    /// The file parsed into `T`
    Parsed(T),
    /// The file exists but is not a valid `T`
    Malformed(serde_json::Error),
}

/// Read and parse a JSON file
///
/// Only I/O failures on an existing file are errors; absence and bad content
/// are reported through [`ReadOutcome`].
pub fn read_json<T, P>(path: P) -> Result<ReadOutcome<T>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ReadOutcome::Missing),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            // Not UTF-8; treat like any other unparseable content
            return Ok(ReadOutcome::Malformed(serde_json::Error::io(e)));
        }
        Err(e) => {
            return Err(LedgerError::Persistence(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Ok(ReadOutcome::Parsed(value)),
        Err(e) => Ok(ReadOutcome::Malformed(e)),
    }
}

/// Path of the sibling temp file used while writing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    if let Err(e) = write_temp(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Persistence(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn write_temp<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), LedgerError> {
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Persistence(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Persistence(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Persistence(format!("Failed to sync data: {}", e)))
}
