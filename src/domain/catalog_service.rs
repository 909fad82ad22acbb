//! Catalog management domain logic.
//!
//! The repository layer stores whatever it is given; field validation and
//! default filling live here, at the caller layer, so the storage contract
//! stays a plain read/rewrite of the collection.

use anyhow::{bail, Result};
use log::info;

use crate::domain::commands::catalog::SaveProductCommand;
use crate::domain::models::product::{Product, DEFAULT_CATEGORY, DEFAULT_COLOR};
use crate::storage::json::{JsonConnection, ProductRepository};
use crate::storage::traits::ProductStorage;

/// Service owning product lifecycle: list, add/edit, delete.
#[derive(Debug, Clone)]
pub struct CatalogService {
    product_repository: ProductRepository,
}

impl CatalogService {
    pub fn new(connection: JsonConnection) -> Self {
        Self {
            product_repository: ProductRepository::new(connection),
        }
    }

    /// All products in storage order, seeding the example set on first run.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.product_repository.list_products()
    }

    /// Validate and persist an add or edit. Returns the stored product,
    /// including the generated identifier on an add.
    pub fn save_product(&self, command: SaveProductCommand) -> Result<Product> {
        let name = command.name.trim();
        if name.is_empty() {
            bail!("Product name must not be empty");
        }
        if !command.price.is_finite() || command.price < 0.0 {
            bail!("Product price must be a non-negative amount");
        }
        if !command.cost.is_finite() || command.cost < 0.0 {
            bail!("Product cost must be a non-negative amount");
        }

        let is_edit = command.id.is_some();
        let product = Product {
            id: command.id.unwrap_or_else(Product::generate_id),
            name: name.to_string(),
            price: command.price,
            cost: command.cost,
            category: command
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            color: command
                .color
                .filter(|c| !c.trim().is_empty())
                .or_else(|| Some(DEFAULT_COLOR.to_string())),
        };

        self.product_repository.save_product(&product)?;
        info!(
            "{} product '{}' ({})",
            if is_edit { "Updated" } else { "Added" },
            product.name,
            product.id
        );
        Ok(product)
    }

    /// Delete a product. Historical transactions are unaffected: they hold
    /// snapshots, not references.
    pub fn delete_product(&self, product_id: &str) -> Result<()> {
        self.product_repository.delete_product(product_id)?;
        info!("Deleted product {}", product_id);
        Ok(())
    }

    /// Distinct category labels in first-seen catalog order, for grid
    /// filtering.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.list_products()? {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        Ok(categories)
    }
}
