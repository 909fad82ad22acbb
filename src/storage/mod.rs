//! Storage layer: abstraction traits plus the JSON document store backend.

pub mod json;
pub mod traits;

pub use traits::{ProductStorage, TransactionLogStorage};
