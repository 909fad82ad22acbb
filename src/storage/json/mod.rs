//! # JSON Storage Module
//!
//! File-based storage for the point-of-sale core. Each named collection is a
//! single JSON document in the data directory, written whole on every
//! mutation; there is no partial or incremental persistence and no schema
//! version field.
//!
//! ## File layout
//!
//! ```text
//! data/
//! ├── smartpos_products.json      ← product catalog, storage order
//! └── smartpos_transactions.json  ← transaction log, newest first
//! ```
//!
//! ## Document format
//!
//! ```json
//! [{"id":"1","name":"Latte","price":28.0,"cost":8.0,"category":"Coffee","color":"#78350f"}]
//! ```

pub mod connection;
pub mod product_repository;
pub mod transaction_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::{JsonConnection, PRODUCTS_KEY, TRANSACTIONS_KEY};
pub use product_repository::ProductRepository;
pub use transaction_repository::TransactionLogRepository;
