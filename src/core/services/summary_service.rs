//! Aggregation of filtered transactions into per-category totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::services::TransactionService;
use crate::domain::{Ledger, Transaction, TransactionKind, WindowSelection};
use crate::errors::CoreResult;
use crate::time::Clock;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Selects how category totals are keyed and signed.
pub enum AggregationMode {
    /// One signed mapping; income adds, expense subtracts. Same-named
    /// categories of both kinds collapse into a single bucket.
    Net,
    /// Two absolute mappings, one per kind.
    Split,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Absolute per-kind totals; values are never negative.
pub struct SplitTotals {
    pub income: BTreeMap<String, f64>,
    pub expense: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Result of an aggregation request; zero-valued categories are omitted.
///
/// Sign and magnitude interpretation (e.g. taking absolute values for an
/// unsigned chart) is the caller's responsibility.
pub enum CategoryTotals {
    Net(BTreeMap<String, f64>),
    Split(SplitTotals),
}

/// Aggregates transaction subsets for charting; totals are recomputed on
/// every request and never cached.
pub struct SummaryService;

impl SummaryService {
    /// Signed totals keyed by category name across both kinds.
    ///
    /// A category used by both kinds folds into one signed bucket, losing
    /// kind separation; use [`Self::split_by_category`] to keep kinds apart.
    pub fn net_by_category(transactions: &[&Transaction]) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for txn in transactions {
            *totals.entry(txn.category.clone()).or_insert(0.0) += txn.signed_amount();
        }
        totals.retain(|_, value| value.abs() > f64::EPSILON);
        totals
    }

    /// Absolute totals per kind, keyed by category name.
    pub fn split_by_category(transactions: &[&Transaction]) -> SplitTotals {
        let mut totals = SplitTotals::default();
        for txn in transactions {
            let bucket = match txn.kind {
                TransactionKind::Income => &mut totals.income,
                TransactionKind::Expense => &mut totals.expense,
            };
            *bucket.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        totals.income.retain(|_, value| value.abs() > f64::EPSILON);
        totals.expense.retain(|_, value| value.abs() > f64::EPSILON);
        totals
    }

    /// Aggregates in the requested mode.
    pub fn aggregate(transactions: &[&Transaction], mode: AggregationMode) -> CategoryTotals {
        match mode {
            AggregationMode::Net => CategoryTotals::Net(Self::net_by_category(transactions)),
            AggregationMode::Split => CategoryTotals::Split(Self::split_by_category(transactions)),
        }
    }

    /// Runs the full pipeline: resolve the selection against the clock's
    /// current date, filter the ledger's transactions, aggregate.
    pub fn breakdown<C: Clock>(
        ledger: &Ledger,
        selection: &WindowSelection,
        mode: AggregationMode,
        clock: &C,
    ) -> CoreResult<CategoryTotals> {
        let window = selection.resolve(clock.today())?;
        let filtered = TransactionService::in_window(&ledger.transactions, window.as_ref());
        Ok(Self::aggregate(&filtered, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimePeriod;
    use chrono::{DateTime, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn txn(kind: TransactionKind, amount: f64, category: &str, when: &str) -> Transaction {
        Transaction::new(kind, amount, category, at(when))
    }

    #[test]
    fn net_mode_signs_by_kind_and_merges_names() {
        let entries = vec![
            txn(TransactionKind::Income, 100.0, "Other", "2024-06-01T10:00:00Z"),
            txn(TransactionKind::Expense, 30.0, "Other", "2024-06-02T10:00:00Z"),
            txn(TransactionKind::Expense, 45.0, "Food", "2024-06-03T10:00:00Z"),
        ];
        let refs: Vec<_> = entries.iter().collect();
        let totals = SummaryService::net_by_category(&refs);
        assert_eq!(totals["Other"], 70.0);
        assert_eq!(totals["Food"], -45.0);
    }

    #[test]
    fn net_mode_drops_buckets_that_cancel_out() {
        let entries = vec![
            txn(TransactionKind::Income, 50.0, "Other", "2024-06-01T10:00:00Z"),
            txn(TransactionKind::Expense, 50.0, "Other", "2024-06-02T10:00:00Z"),
        ];
        let refs: Vec<_> = entries.iter().collect();
        assert!(SummaryService::net_by_category(&refs).is_empty());
    }

    #[test]
    fn split_mode_keeps_kinds_apart_and_stays_non_negative() {
        let entries = vec![
            txn(TransactionKind::Income, 100.0, "Other", "2024-06-01T10:00:00Z"),
            txn(TransactionKind::Expense, 30.0, "Other", "2024-06-02T10:00:00Z"),
            txn(TransactionKind::Expense, 20.0, "Other", "2024-06-03T10:00:00Z"),
        ];
        let refs: Vec<_> = entries.iter().collect();
        let totals = SummaryService::split_by_category(&refs);
        assert_eq!(totals.income["Other"], 100.0);
        assert_eq!(totals.expense["Other"], 50.0);
        assert!(totals.income.values().chain(totals.expense.values()).all(|v| *v >= 0.0));
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        match SummaryService::aggregate(&[], AggregationMode::Net) {
            CategoryTotals::Net(totals) => assert!(totals.is_empty()),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn breakdown_filters_by_the_resolved_window() {
        let mut ledger = Ledger::new("Summary");
        ledger.add_transaction(txn(
            TransactionKind::Expense,
            40.0,
            "Food",
            "2024-06-13T08:00:00Z",
        ));
        ledger.add_transaction(txn(
            TransactionKind::Expense,
            99.0,
            "Food",
            "2024-05-01T08:00:00Z",
        ));
        let clock = FixedClock(at("2024-06-13T20:00:00Z"));
        let selection = WindowSelection::period(TimePeriod::Daily);
        let totals =
            SummaryService::breakdown(&ledger, &selection, AggregationMode::Net, &clock).unwrap();
        match totals {
            CategoryTotals::Net(totals) => {
                assert_eq!(totals.len(), 1);
                assert_eq!(totals["Food"], -40.0);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }
}
