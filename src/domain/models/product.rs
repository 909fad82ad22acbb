//! Domain model for a catalog product.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category applied when a product is saved or imported without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Display color applied when a product is saved without one.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A sellable catalog entry.
///
/// The identifier is an opaque unique string; the seeded defaults use short
/// numeric ids while products created at runtime get a fresh UUID. Price and
/// cost are currency amounts in the store's single fixed currency. The color
/// is a display hint only and carries no business meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub cost: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Product {
    /// Generate a fresh unique product identifier.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}
