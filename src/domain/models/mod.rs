//! Domain models for the point-of-sale core.

pub mod backup;
pub mod cart;
pub mod product;
pub mod transaction;

pub use backup::BackupDocument;
pub use cart::{Cart, CartItem};
pub use product::Product;
pub use transaction::{PaymentMethod, Transaction};
