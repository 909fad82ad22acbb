//! JSON document store connection.
//!
//! Each named collection lives in its own file, `{key}.json`, under the
//! data directory, holding one complete serialized array. The key names are
//! kept stable so previously exported backups import unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the product catalog collection.
pub const PRODUCTS_KEY: &str = "smartpos_products";

/// Storage key for the transaction log collection.
pub const TRANSACTIONS_KEY: &str = "smartpos_transactions";

/// Handle to the data directory holding the JSON collections.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Open a connection rooted at the given data directory, creating the
    /// directory if necessary.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)
            .with_context(|| format!("Failed to create data directory {:?}", base_directory))?;
        info!("Opened JSON store at {:?}", base_directory);
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path backing a named collection.
    pub fn collection_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Whether the collection has ever been written.
    pub fn collection_exists(&self, key: &str) -> bool {
        self.collection_path(key).exists()
    }

    /// Read a complete collection.
    ///
    /// `None` means the collection has never been written (first run).
    /// A file that exists but does not parse is treated as a recoverable
    /// reset-to-empty condition: a diagnostic is logged and `Some(vec![])`
    /// is returned, so callers can still distinguish "never initialized"
    /// from "initialized but unreadable".
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let path = self.collection_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read collection file {:?}", path))?;
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                warn!(
                    "Stored collection '{}' at {:?} is corrupt ({}); treating it as empty",
                    key, path, e
                );
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Write a complete collection, replacing whatever was stored before.
    /// Uses a temp-file-then-rename write so a failed write never leaves a
    /// half-written document behind.
    pub fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(key);
        let tmp_path = self.base_directory.join(format!("{}.json.tmp", key));

        let json = serde_json::to_string(records)
            .with_context(|| format!("Failed to serialize collection '{}'", key))?;
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write collection file {:?}", tmp_path))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to move collection file into place at {:?}", path))?;
        Ok(())
    }
}
