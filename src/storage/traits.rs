//! # Storage Traits
//!
//! Storage abstraction for the catalog and the transaction log, so the
//! domain layer works against an interface rather than a concrete backing
//! store and tests can substitute their own.

use anyhow::Result;

use crate::domain::models::product::Product;
use crate::domain::models::transaction::Transaction;

/// Interface for catalog storage operations.
///
/// Every mutating call rewrites the entire collection; there is no partial
/// or incremental persistence.
pub trait ProductStorage: Send + Sync {
    /// Return all products in storage order. On first-ever access (no stored
    /// catalog) this seeds and returns a default set; once initialized it
    /// never re-seeds, even if the catalog becomes empty through deletions.
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Insert if the id is unseen, else replace in place preserving
    /// position. This layer performs no field validation; that is the
    /// caller's responsibility.
    fn save_product(&self, product: &Product) -> Result<()>;

    /// Remove the matching entry. No-op (not an error) when absent.
    fn delete_product(&self, product_id: &str) -> Result<()>;

    /// Wholly replace the stored catalog. Used by the import gateway only.
    fn replace_products(&self, products: &[Product]) -> Result<()>;
}

/// Interface for the append-only transaction log.
///
/// Records are write-once: no update or delete operation exists.
pub trait TransactionLogStorage: Send + Sync {
    /// Return all transactions, newest first. An absent store is an empty
    /// log, not an error.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Insert at the head; newest-first ordering is a storage-order
    /// invariant, not a sort applied on read.
    fn append_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Wholly replace the stored log. Used by the import gateway only.
    fn replace_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}
