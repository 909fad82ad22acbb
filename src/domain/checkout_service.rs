//! Checkout: the single path that turns a cart into a persisted transaction.

use std::sync::Arc;

use anyhow::{bail, Result};
use log::info;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::models::cart::Cart;
use crate::domain::models::transaction::{PaymentMethod, Transaction};
use crate::storage::json::{JsonConnection, TransactionLogRepository};
use crate::storage::traits::TransactionLogStorage;

/// Service that finalizes carts and owns reads of the transaction log.
#[derive(Clone)]
pub struct CheckoutService {
    transaction_repository: TransactionLogRepository,
    clock: Arc<dyn Clock>,
}

impl CheckoutService {
    pub fn new(connection: JsonConnection) -> Self {
        Self::with_clock(connection, Arc::new(SystemClock))
    }

    pub fn with_clock(connection: JsonConnection, clock: Arc<dyn Clock>) -> Self {
        Self {
            transaction_repository: TransactionLogRepository::new(connection),
            clock,
        }
    }

    /// Finalize the cart into a transaction and clear it.
    ///
    /// The persisted totals are taken from the cart exactly as last shown to
    /// the operator, not recomputed here, so any rounding already present in
    /// the displayed figures carries through unchanged. An empty cart is a
    /// validation failure: no transaction is created and the cart is left
    /// untouched.
    pub fn checkout(&self, cart: &mut Cart, payment_method: PaymentMethod) -> Result<Transaction> {
        if cart.is_empty() {
            bail!("Cannot check out an empty cart");
        }

        let transaction = Transaction {
            id: Transaction::generate_id(),
            timestamp: self.clock.now().timestamp_millis(),
            items: cart.items().to_vec(),
            total: cart.total(),
            total_profit: cart.profit(),
            payment_method,
        };

        self.transaction_repository
            .append_transaction(&transaction)?;
        cart.clear();

        info!(
            "Checkout complete: {} collected {:.2} ({} items) via {}",
            transaction.id,
            transaction.total,
            transaction.items.len(),
            payment_method.label()
        );
        Ok(transaction)
    }

    /// All recorded transactions, newest first.
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.list_transactions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::models::product::Product;
    use crate::storage::json::test_utils::TestEnvironment;
    use chrono::{FixedOffset, TimeZone};

    fn latte() -> Product {
        Product {
            id: "p-latte".to_string(),
            name: "Latte".to_string(),
            price: 28.0,
            cost: 8.0,
            category: "Coffee".to_string(),
            color: None,
        }
    }

    fn service_at(timestamp_ms: i64) -> (CheckoutService, TestEnvironment) {
        let env = TestEnvironment::new().unwrap();
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = offset.timestamp_millis_opt(timestamp_ms).unwrap();
        let service = CheckoutService::with_clock(env.connection.clone(), Arc::new(FixedClock(now)));
        (service, env)
    }

    #[test]
    fn empty_cart_checkout_fails_and_writes_nothing() {
        let (service, _env) = service_at(1_718_400_000_000);
        let mut cart = Cart::new();

        assert!(service.checkout(&mut cart, PaymentMethod::Cash).is_err());
        assert!(service.list_transactions().unwrap().is_empty());
    }

    #[test]
    fn checkout_records_cart_totals_and_clears_the_cart() {
        let (service, _env) = service_at(1_718_400_000_000);

        let mut cart = Cart::new();
        cart.add_item(&latte());
        cart.add_item(&latte());
        assert_eq!(cart.total(), 56.0);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.profit(), 40.0);

        let transaction = service.checkout(&mut cart, PaymentMethod::Cash).unwrap();

        assert_eq!(transaction.total, 56.0);
        assert_eq!(transaction.total_profit, 40.0);
        assert_eq!(transaction.payment_method, PaymentMethod::Cash);
        assert_eq!(transaction.timestamp, 1_718_400_000_000);
        assert_eq!(transaction.items.len(), 1);
        assert_eq!(transaction.items[0].quantity, 2);
        assert!(cart.is_empty());

        let log = service.list_transactions().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], transaction);
    }

    #[test]
    fn each_checkout_lands_at_the_head_of_the_log() {
        let (service, _env) = service_at(1_718_400_000_000);

        let mut cart = Cart::new();
        cart.add_item(&latte());
        let first = service.checkout(&mut cart, PaymentMethod::Card).unwrap();

        cart.add_item(&latte());
        let second = service.checkout(&mut cart, PaymentMethod::Qr).unwrap();

        assert_ne!(first.id, second.id);
        let log = service.list_transactions().unwrap();
        assert_eq!(log[0].id, second.id);
        assert_eq!(log[1].id, first.id);
    }

    #[test]
    fn recorded_items_are_independent_of_later_catalog_state() {
        let (service, _env) = service_at(1_718_400_000_000);

        let mut product = latte();
        let mut cart = Cart::new();
        cart.add_item(&product);
        let transaction = service.checkout(&mut cart, PaymentMethod::Cash).unwrap();

        // Later catalog edits must not show up in the stored record.
        product.price = 1.0;
        let log = service.list_transactions().unwrap();
        assert_eq!(log[0].items[0].product.price, 28.0);
        assert_eq!(transaction.items[0].product.price, 28.0);
    }
}
