//! JSON-backed transaction log repository.

use anyhow::Result;
use log::info;

use super::connection::{JsonConnection, TRANSACTIONS_KEY};
use crate::domain::models::transaction::Transaction;
use crate::storage::traits::TransactionLogStorage;

/// Repository owning the persisted, newest-first transaction log.
#[derive(Debug, Clone)]
pub struct TransactionLogRepository {
    connection: JsonConnection,
}

impl TransactionLogRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl TransactionLogStorage for TransactionLogRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self
            .connection
            .read_collection(TRANSACTIONS_KEY)?
            .unwrap_or_default())
    }

    fn append_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.list_transactions()?;
        transactions.insert(0, transaction.clone());
        self.connection
            .write_collection(TRANSACTIONS_KEY, &transactions)?;
        info!(
            "Recorded transaction {} ({} items, total {:.2})",
            transaction.id,
            transaction.items.len(),
            transaction.total
        );
        Ok(())
    }

    fn replace_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.connection
            .write_collection(TRANSACTIONS_KEY, transactions)
    }
}
