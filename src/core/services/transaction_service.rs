//! Business logic helpers for recording and querying transactions.

use tracing::debug;
use uuid::Uuid;

use crate::domain::{DateWindow, Ledger, Transaction, TransactionKind};
use crate::errors::{CoreError, CoreResult};
use crate::time::Clock;

/// Provides the append-only store operations and the window filter.
///
/// There is no removal operation; transactions live for the session.
pub struct TransactionService;

impl TransactionService {
    /// Parses raw form input into a valid amount.
    ///
    /// Rejects anything that is not a finite, non-negative number.
    pub fn parse_amount(raw: &str) -> CoreResult<f64> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidAmount(raw.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidAmount(raw.to_string()));
        }
        Ok(value)
    }

    /// Appends a transaction at the front of the store, assigning an
    /// identifier when the incoming one is nil, and returns the identifier.
    ///
    /// The category is not checked against the registry; store and registry
    /// are only loosely coupled.
    pub fn append(ledger: &mut Ledger, transaction: Transaction) -> Uuid {
        if !ledger.has_category(transaction.kind, &transaction.category) {
            debug!(
                category = %transaction.category,
                kind = %transaction.kind,
                "appending transaction with unregistered category"
            );
        }
        ledger.add_transaction(transaction)
    }

    /// Boundary helper: validates raw amount input, stamps the clock's
    /// current time, and appends.
    pub fn record<C: Clock>(
        ledger: &mut Ledger,
        kind: TransactionKind,
        raw_amount: &str,
        category: impl Into<String>,
        description: Option<String>,
        clock: &C,
    ) -> CoreResult<Uuid> {
        let amount = Self::parse_amount(raw_amount)?;
        let mut transaction = Transaction::draft(kind, amount, category, clock.now());
        transaction.description = description;
        Ok(Self::append(ledger, transaction))
    }

    /// Returns the full store, newest first.
    pub fn list(ledger: &Ledger) -> &[Transaction] {
        &ledger.transactions
    }

    /// Returns the transactions whose date falls inside `window`, preserving
    /// their relative order. `None` applies no filtering; an empty result is
    /// an empty vec, not an error.
    pub fn in_window<'a>(
        transactions: &'a [Transaction],
        window: Option<&DateWindow>,
    ) -> Vec<&'a Transaction> {
        match window {
            Some(window) => transactions
                .iter()
                .filter(|txn| window.contains(txn.date))
                .collect(),
            None => transactions.iter().collect(),
        }
    }
}
