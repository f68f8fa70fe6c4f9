//! JSON file backing store
//!
//! Persists the card record as pretty-printed JSON at a configurable path.
//!
//! # Atomic saves
//!
//! `save` never writes into the target file directly. The record is written
//! to a temporary file in the same directory, flushed to disk and then renamed
//! over the target, so a later `load` sees either the old record or the new
//! one and never a partial write.

use crate::core::traits::RecordStore;
use crate::types::{AccountRecord, AtmError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

/// Default location of the card data file
pub const DEFAULT_CARD_FILE: &str = "cardData.json";

/// Card record stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    fn read(&self) -> Result<AccountRecord, AtmError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| AtmError::persistence(&self.path, e))?;
        let record: AccountRecord =
            serde_json::from_str(&content).map_err(|e| AtmError::persistence(&self.path, e))?;

        if let Some(currency) = record.negative_balance() {
            return Err(AtmError::persistence(
                &self.path,
                format!("negative {} balance", currency),
            ));
        }
        Ok(record)
    }

    fn write(&self, record: &AccountRecord) -> Result<(), AtmError> {
        let json =
            serde_json::to_string_pretty(record).map_err(|e| AtmError::persistence(&self.path, e))?;

        // Same directory as the target so the final rename stays on one filesystem
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| AtmError::persistence(&self.path, e))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| AtmError::persistence(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| AtmError::persistence(&self.path, e.error))?;

        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<AccountRecord, AtmError> {
        match self.read() {
            Ok(record) => {
                info!("Card data loaded from {}", self.path.display());
                Ok(record)
            }
            Err(e) => {
                error!("Error loading card data: {}", e);
                Err(e)
            }
        }
    }

    fn save(&self, record: &AccountRecord) -> Result<(), AtmError> {
        match self.write(record) {
            Ok(()) => {
                info!("Card data saved to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                error!("Error saving card data: {}", e);
                Err(e)
            }
        }
    }
}
