//! Domain layer: models, commands and the services implementing the
//! point-of-sale business rules.

pub mod analytics_service;
pub mod backup_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod clock;
pub mod commands;
pub mod models;
pub mod receipt_service;
pub mod report_service;

pub use analytics_service::{AnalyticsService, DailySummary, DayPoint};
pub use backup_service::{BackupService, ExportToPathResult, ImportSummary};
pub use catalog_service::CatalogService;
pub use checkout_service::CheckoutService;
pub use clock::{Clock, SystemClock};
pub use receipt_service::ReceiptService;
pub use report_service::{GeminiClient, ReportService, TextGenerator};
