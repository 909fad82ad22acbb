//! # SmartPOS Core
//!
//! Point-of-sale core for a single-location retail operation: product
//! catalog, shopping cart, transaction recording, sales analytics, backup
//! import/export, receipt rendering and an optional AI daily-sales report.
//!
//! All state persists as JSON documents under a local data directory; the
//! execution model is single-threaded and single-session, with no locking
//! or transaction isolation. The one outbound dependency, the
//! text-generation service behind the daily report, is optional and
//! degrades to a fixed message when absent or unreachable.

use std::path::Path;

use anyhow::{anyhow, Result};

pub mod domain;
pub mod storage;

pub use storage::json::JsonConnection;

use domain::{
    AnalyticsService, BackupService, CatalogService, CheckoutService, ReceiptService,
    ReportService,
};

/// Main backend struct that wires every service over one shared connection.
pub struct Backend {
    pub catalog_service: CatalogService,
    pub checkout_service: CheckoutService,
    pub analytics_service: AnalyticsService,
    pub backup_service: BackupService,
    pub receipt_service: ReceiptService,
    pub report_service: ReportService,
}

impl Backend {
    /// Create a backend rooted at the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let connection = JsonConnection::new(data_dir)?;

        Ok(Backend {
            catalog_service: CatalogService::new(connection.clone()),
            checkout_service: CheckoutService::new(connection.clone()),
            analytics_service: AnalyticsService::new(),
            backup_service: BackupService::new(connection),
            receipt_service: ReceiptService::new(),
            report_service: ReportService::from_env(),
        })
    }

    /// Create a backend in the per-user data directory.
    pub fn from_default_location() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .map(|dir| dir.join("smartpos"))
            .ok_or_else(|| anyhow!("Could not determine a per-user data directory"))?;
        Self::new(data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::catalog::SaveProductCommand;
    use crate::domain::models::cart::Cart;
    use crate::domain::models::transaction::PaymentMethod;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn full_sale_flow_against_one_backend() {
        let dir = tempfile::TempDir::new().unwrap();
        let backend = Backend::new(dir.path()).unwrap();

        // Start from an explicitly empty catalog, then add the worked
        // example product.
        for product in backend.catalog_service.list_products().unwrap() {
            backend.catalog_service.delete_product(&product.id).unwrap();
        }
        let latte = backend
            .catalog_service
            .save_product(SaveProductCommand {
                name: "Latte".to_string(),
                price: 28.0,
                cost: 8.0,
                category: Some("Coffee".to_string()),
                ..Default::default()
            })
            .unwrap();

        let mut cart = Cart::new();
        cart.add_item(&latte);
        cart.add_item(&latte);
        assert_eq!(cart.total(), 56.0);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.profit(), 40.0);

        let transaction = backend
            .checkout_service
            .checkout(&mut cart, PaymentMethod::Cash)
            .unwrap();
        assert_eq!(transaction.total, 56.0);
        assert_eq!(transaction.total_profit, 40.0);
        assert!(cart.is_empty());

        let log = backend.checkout_service.list_transactions().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id, transaction.id);

        // The day the sale landed on, in the offset the test runs under,
        // shows up in the daily summary.
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .timestamp_millis_opt(transaction.timestamp)
            .unwrap();
        let summary = backend.analytics_service.daily_summary(&log, now);
        assert_eq!(summary.order_count, 1);
        assert_eq!(summary.total_sales, 56.0);
        assert_eq!(summary.total_profit, 40.0);
    }
}
