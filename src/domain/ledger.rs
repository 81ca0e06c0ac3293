use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::Category, common::TransactionKind, transaction::Transaction};

/// Owned session state: the category registry plus the transaction store.
///
/// Instances are passed explicitly into every service operation; nothing in
/// the crate holds one globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            categories: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Seeds the default category sets shipped with the tracker UI.
    pub fn with_default_categories(name: impl Into<String>) -> Self {
        let mut ledger = Self::new(name);
        for name in ["Salary", "Freelance", "Investments", "Other"] {
            ledger
                .categories
                .push(Category::new(name, TransactionKind::Income));
        }
        for name in [
            "Food",
            "Transport",
            "Shopping",
            "Bills",
            "Entertainment",
            "Other",
        ] {
            ledger
                .categories
                .push(Category::new(name, TransactionKind::Expense));
        }
        ledger
    }

    /// Inserts at the front so the newest transaction is viewed first.
    /// Assigns an identifier when the incoming one is the nil sentinel.
    pub fn add_transaction(&mut self, mut transaction: Transaction) -> Uuid {
        transaction.ensure_id();
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
        self.touch();
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Category entries of one kind, in display order.
    pub fn categories_of(&self, kind: TransactionKind) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |cat| cat.kind == kind)
    }

    pub fn has_category(&self, kind: TransactionKind, name: &str) -> bool {
        self.categories
            .iter()
            .any(|cat| cat.kind == kind && cat.name == name)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
