//! In-memory cart for the sale currently being assembled.
//!
//! Cart items are value snapshots of the catalog product taken at the moment
//! of addition. Editing or deleting the product in the catalog afterwards
//! never alters what is already in the cart, and the same holds once the
//! items are embedded in a persisted transaction.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A product snapshot plus the quantity being purchased.
///
/// Serialized flattened (product fields and `quantity` at the same level)
/// to match the stored transaction format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }

    /// (Price minus cost) times quantity for this line.
    pub fn line_profit(&self) -> f64 {
        (self.product.price - self.product.cost) * self.quantity as f64
    }
}

/// Ordered collection of cart items, at most one entry per product id.
///
/// Totals are recomputed on every call rather than cached; they drive both
/// the checkout amounts and the receipt, so a stale value is never acceptable.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product. A repeated add increments the existing
    /// entry's quantity instead of appending a duplicate; a first add stores
    /// a snapshot of the product as it is right now.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the matching entry entirely, regardless of quantity.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Apply a quantity delta to the matching entry, clamped to a minimum
    /// of 1. Removal is a distinct explicit action, never a side effect of
    /// decrementing. No-op when the id is not in the cart.
    pub fn change_quantity(&mut self, product_id: &str, delta: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            let adjusted = item.quantity as i64 + delta as i64;
            item.quantity = adjusted.max(1) as u32;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over current entries.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over current entries.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of (price − cost) × quantity over current entries.
    pub fn profit(&self) -> f64 {
        self.items.iter().map(CartItem::line_profit).sum()
    }
}
