//! JSON-backed product catalog repository.

use anyhow::Result;
use log::info;

use super::connection::{JsonConnection, PRODUCTS_KEY};
use crate::domain::models::product::Product;
use crate::storage::traits::ProductStorage;

/// Repository owning the persisted product catalog.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    connection: JsonConnection,
}

/// The example catalog written on first run.
fn default_products() -> Vec<Product> {
    let entry = |id: &str, name: &str, price: f64, cost: f64, category: &str, color: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        cost,
        category: category.to_string(),
        color: Some(color.to_string()),
    };

    vec![
        entry("1", "Latte", 28.00, 8.00, "Coffee", "#78350f"),
        entry("2", "Cappuccino", 26.00, 7.50, "Coffee", "#92400e"),
        entry("3", "Espresso", 18.00, 5.00, "Coffee", "#451a03"),
        entry("4", "Croissant", 15.00, 6.00, "Food", "#d97706"),
        entry("5", "Blueberry Muffin", 18.00, 7.00, "Food", "#2563eb"),
        entry("6", "Iced Lemon Tea", 20.00, 3.00, "Drinks", "#059669"),
    ]
}

impl ProductRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ProductStorage for ProductRepository {
    fn list_products(&self) -> Result<Vec<Product>> {
        match self.connection.read_collection(PRODUCTS_KEY)? {
            Some(products) => Ok(products),
            None => {
                // First-ever access: seed the catalog. Once this document
                // exists the seed never fires again, even on an empty list.
                let seed = default_products();
                self.connection.write_collection(PRODUCTS_KEY, &seed)?;
                info!("Seeded catalog with {} example products", seed.len());
                Ok(seed)
            }
        }
    }

    fn save_product(&self, product: &Product) -> Result<()> {
        let mut products = self.list_products()?;
        if let Some(position) = products.iter().position(|p| p.id == product.id) {
            products[position] = product.clone();
        } else {
            products.push(product.clone());
        }
        self.connection.write_collection(PRODUCTS_KEY, &products)
    }

    fn delete_product(&self, product_id: &str) -> Result<()> {
        let mut products = self.list_products()?;
        products.retain(|p| p.id != product_id);
        self.connection.write_collection(PRODUCTS_KEY, &products)
    }

    fn replace_products(&self, products: &[Product]) -> Result<()> {
        self.connection.write_collection(PRODUCTS_KEY, products)
    }
}
