//! Portable full-state backup document.

use serde::{Deserialize, Serialize};

use super::product::Product;
use super::transaction::Transaction;

/// Full-state snapshot of the catalog and transaction log.
///
/// On export every field is populated. On import each section is optional
/// and independently replaces its store when present; a present section that
/// is not a proper sequence fails deserialization, which is exactly the
/// rejection the import gateway wants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    /// RFC 3339 timestamp of when the snapshot was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_optional_on_import() {
        let document: BackupDocument = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(document.products, Some(Vec::new()));
        assert!(document.transactions.is_none());
        assert!(document.exported_at.is_none());
    }

    #[test]
    fn non_sequence_section_is_rejected() {
        let result = serde_json::from_str::<BackupDocument>(r#"{"products": "not-an-array"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn exported_at_uses_camel_case_on_the_wire() {
        let document = BackupDocument {
            products: Some(Vec::new()),
            transactions: Some(Vec::new()),
            exported_at: Some("2026-08-24T10:00:00+00:00".to_string()),
        };
        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("exportedAt").is_some());
    }
}
