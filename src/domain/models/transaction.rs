//! Domain model for a completed sale.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::CartItem;

/// How the customer paid. Closed enumeration; stored as the uppercase
/// string form (`CASH`, `CARD`, `QR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Qr,
}

impl PaymentMethod {
    /// Human-readable label for receipts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Qr => "QR code",
        }
    }
}

/// Immutable record of a completed sale.
///
/// Items are independent copies of the cart contents at checkout time, and
/// `total`/`total_profit` are carried over from the cart as displayed to the
/// operator, not recomputed. Once appended to the log a transaction is never
/// mutated or deleted through normal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Millisecond epoch timestamp of the checkout.
    pub timestamp: i64,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub total_profit: f64,
    pub payment_method: PaymentMethod,
}

impl Transaction {
    /// Generate a fresh unique transaction identifier.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// The calendar day this sale happened on, in the given local offset.
    /// Returns `None` only for timestamps outside the representable range.
    pub fn local_day(&self, offset: FixedOffset) -> Option<NaiveDate> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.with_timezone(&offset).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::product::Product;

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "tx-1".to_string(),
            timestamp: 1_718_400_000_000,
            items: vec![CartItem {
                product: Product {
                    id: "p1".to_string(),
                    name: "Latte".to_string(),
                    price: 28.0,
                    cost: 8.0,
                    category: "Coffee".to_string(),
                    color: Some("#78350f".to_string()),
                },
                quantity: 2,
            }],
            total: 56.0,
            total_profit: 40.0,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn payment_method_serializes_as_uppercase_strings() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"CASH\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "\"CARD\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Qr).unwrap(), "\"QR\"");

        let parsed: PaymentMethod = serde_json::from_str("\"QR\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Qr);
    }

    #[test]
    fn transaction_serializes_with_camel_case_field_names() {
        let value = serde_json::to_value(sample_transaction()).unwrap();
        assert!(value.get("totalProfit").is_some());
        assert!(value.get("paymentMethod").is_some());
        assert!(value.get("total_profit").is_none());

        // Cart items serialize flattened, product fields alongside quantity.
        let item = &value["items"][0];
        assert_eq!(item["name"], "Latte");
        assert_eq!(item["quantity"], 2);
    }

    #[test]
    fn local_day_follows_the_injected_offset() {
        // 2024-06-15T00:30:00Z
        let tx = Transaction {
            timestamp: 1_718_411_400_000,
            ..sample_transaction()
        };

        let utc = FixedOffset::east_opt(0).unwrap();
        let west = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            tx.local_day(utc),
            Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
        // Half past midnight UTC is still the previous evening at UTC-5.
        assert_eq!(
            tx.local_day(west),
            Some(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
        );
    }
}
