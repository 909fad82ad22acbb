//! Import/export gateway for full-state backups.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::models::backup::BackupDocument;
use crate::storage::json::{JsonConnection, ProductRepository, TransactionLogRepository};
use crate::storage::traits::{ProductStorage, TransactionLogStorage};

/// Which sections an import applied, with their record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub products_replaced: Option<usize>,
    pub transactions_replaced: Option<usize>,
}

/// Outcome of writing a backup file to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportToPathResult {
    pub file_path: PathBuf,
    pub product_count: usize,
    pub transaction_count: usize,
}

/// Service serializing the full catalog and transaction log to a portable
/// document and restoring them from one.
#[derive(Clone)]
pub struct BackupService {
    product_repository: ProductRepository,
    transaction_repository: TransactionLogRepository,
    clock: Arc<dyn Clock>,
}

impl BackupService {
    pub fn new(connection: JsonConnection) -> Self {
        Self::with_clock(connection, Arc::new(SystemClock))
    }

    pub fn with_clock(connection: JsonConnection, clock: Arc<dyn Clock>) -> Self {
        Self {
            product_repository: ProductRepository::new(connection.clone()),
            transaction_repository: TransactionLogRepository::new(connection),
            clock,
        }
    }

    /// Full-state snapshot of both stores plus the export timestamp.
    pub fn export_data(&self) -> Result<BackupDocument> {
        Ok(BackupDocument {
            products: Some(self.product_repository.list_products()?),
            transactions: Some(self.transaction_repository.list_transactions()?),
            exported_at: Some(self.clock.now().to_rfc3339()),
        })
    }

    /// Date-stamped backup filename, e.g. `smartpos_backup_2026-08-24.json`.
    pub fn export_filename(&self) -> String {
        format!(
            "smartpos_backup_{}.json",
            self.clock.now().format("%Y-%m-%d")
        )
    }

    /// Write the backup document to a directory: a caller-supplied one, or
    /// the user's documents folder (falling back to the home directory).
    pub fn export_to_path(&self, custom_path: Option<&str>) -> Result<ExportToPathResult> {
        let document = self.export_data()?;
        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => dirs::document_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| anyhow!("Could not determine an export directory"))?,
        };

        fs::create_dir_all(&export_dir)
            .with_context(|| format!("Failed to create export directory {:?}", export_dir))?;

        let file_path = export_dir.join(self.export_filename());
        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize backup document")?;
        fs::write(&file_path, json)
            .with_context(|| format!("Failed to write backup file {:?}", file_path))?;

        let result = ExportToPathResult {
            file_path,
            product_count: document.products.as_ref().map_or(0, Vec::len),
            transaction_count: document.transactions.as_ref().map_or(0, Vec::len),
        };
        info!(
            "Exported {} products and {} transactions to {:?}",
            result.product_count, result.transaction_count, result.file_path
        );
        Ok(result)
    }

    /// Restore from a backup document.
    ///
    /// A document that is not well-formed, or whose present sections are not
    /// proper sequences of records, fails before anything is written and
    /// both stores stay untouched. On success each present section wholly
    /// replaces its store (no merge); an absent section leaves its store
    /// unchanged.
    pub fn import_data(&self, json: &str) -> Result<ImportSummary> {
        let document: BackupDocument = serde_json::from_str(json)
            .context("Backup document is not valid JSON in the expected shape")?;

        let mut summary = ImportSummary::default();
        if let Some(products) = document.products {
            self.product_repository.replace_products(&products)?;
            summary.products_replaced = Some(products.len());
        }
        if let Some(transactions) = document.transactions {
            self.transaction_repository
                .replace_transactions(&transactions)?;
            summary.transactions_replaced = Some(transactions.len());
        }

        info!(
            "Import complete: products {:?}, transactions {:?}",
            summary.products_replaced, summary.transactions_replaced
        );
        Ok(summary)
    }
}
