//! Sales analytics derived from the transaction log.
//!
//! Pure over its inputs: the caller passes both the transaction snapshot and
//! the current local time, so identical inputs always produce identical
//! bucket boundaries and sums. Days are bucketed on the calendar day in the
//! supplied offset, matching how the shop operator reads "today".

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

use crate::domain::models::transaction::Transaction;

/// Aggregate for a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub total_profit: f64,
    pub order_count: usize,
    pub average_ticket: f64,
}

/// One point of the rolling seven-day series.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    /// Abbreviated weekday label, e.g. `Mon`.
    pub label: String,
    pub sales: f64,
    pub profit: f64,
}

/// Read-only aggregator over a transaction log snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Totals for the calendar day containing `now`.
    pub fn daily_summary(
        &self,
        transactions: &[Transaction],
        now: DateTime<FixedOffset>,
    ) -> DailySummary {
        let today = now.date_naive();
        let mut summary = DailySummary {
            date: today,
            total_sales: 0.0,
            total_profit: 0.0,
            order_count: 0,
            average_ticket: 0.0,
        };

        for transaction in Self::chronological(transactions) {
            if transaction.local_day(*now.offset()) == Some(today) {
                summary.total_sales += transaction.total;
                summary.total_profit += transaction.total_profit;
                summary.order_count += 1;
            }
        }
        if summary.order_count > 0 {
            summary.average_ticket = summary.total_sales / summary.order_count as f64;
        }
        summary
    }

    /// Per-day sales and profit for the current day and the six preceding
    /// days, oldest to newest. Always exactly seven points; days without
    /// transactions contribute zero sums rather than being omitted.
    pub fn seven_day_series(
        &self,
        transactions: &[Transaction],
        now: DateTime<FixedOffset>,
    ) -> Vec<DayPoint> {
        let today = now.date_naive();
        let offset = *now.offset();
        let ordered = Self::chronological(transactions);

        (0..7)
            .map(|i| {
                let date = today - Duration::days(6 - i);
                let mut point = DayPoint {
                    date,
                    label: date.format("%a").to_string(),
                    sales: 0.0,
                    profit: 0.0,
                };
                for transaction in &ordered {
                    if transaction.local_day(offset) == Some(date) {
                        point.sales += transaction.total;
                        point.profit += transaction.total_profit;
                    }
                }
                point
            })
            .collect()
    }

    /// Units sold per product name over the given transactions, in order of
    /// first sale. Feeds the daily report prompt.
    pub fn product_unit_counts(&self, transactions: &[Transaction]) -> Vec<(String, u32)> {
        let mut counts: Vec<(String, u32)> = Vec::new();
        for transaction in Self::chronological(transactions) {
            for item in &transaction.items {
                match counts.iter_mut().find(|(name, _)| *name == item.product.name) {
                    Some((_, count)) => *count += item.quantity,
                    None => counts.push((item.product.name.clone(), item.quantity)),
                }
            }
        }
        counts
    }

    /// Oldest-first view of the log, so sums never depend on the log's
    /// stored newest-first order.
    fn chronological<'a>(transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|t| (t.timestamp, t.id.clone()));
        ordered
    }
}
