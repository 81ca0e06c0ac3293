//! Domain model for income and expense entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::TransactionKind;

/// A single money movement recorded by the user.
///
/// `amount` is always non-negative; the direction comes from `kind`. The
/// category field is the only part mutated after creation, and only through
/// a registry rename cascade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category: category.into(),
            description: None,
            date,
        }
    }

    /// Builds a transaction without an identifier; the store assigns one on
    /// append.
    pub fn draft(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            ..Self::new(kind, amount, category, date)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns a fresh identifier when the current one is the nil sentinel.
    pub fn ensure_id(&mut self) {
        if self.id.is_nil() {
            self.id = Uuid::new_v4();
        }
    }

    /// Amount with the sign implied by the kind: income positive, expense
    /// negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> DateTime<Utc> {
        "2024-06-13T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new(TransactionKind::Income, 100.0, "Salary", noon());
        let expense = Transaction::new(TransactionKind::Expense, 40.0, "Food", noon());
        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
    }

    #[test]
    fn draft_carries_the_nil_sentinel_until_ensured() {
        let mut txn = Transaction::draft(TransactionKind::Expense, 5.0, "Food", noon());
        assert!(txn.id.is_nil());
        txn.ensure_id();
        assert!(!txn.id.is_nil());
        let id = txn.id;
        txn.ensure_id();
        assert_eq!(txn.id, id);
    }
}
