//! Business logic helpers for category management.

use tracing::debug;

use crate::domain::{Category, Ledger, TransactionKind};
use crate::errors::{CoreError, CoreResult};

/// Provides validated lifecycle operations for [`Category`] entries.
///
/// All validation runs before any mutation, so a failed call leaves both the
/// registry and the transaction store untouched.
pub struct CategoryService;

impl CategoryService {
    /// Adds a new category to the back of its kind's list.
    pub fn add(ledger: &mut Ledger, kind: TransactionKind, name: &str) -> CoreResult<()> {
        let name = Self::validate_new_name(ledger, kind, name)?;
        ledger.add_category(Category::new(name, kind));
        Ok(())
    }

    /// Renames a category in place and updates every transaction of that
    /// kind still referencing the old name. Returns the number of
    /// transactions updated.
    ///
    /// Renaming a category to its current name is an accepted no-op.
    pub fn rename(
        ledger: &mut Ledger,
        kind: TransactionKind,
        old_name: &str,
        new_name: &str,
    ) -> CoreResult<usize> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CoreError::InvalidName);
        }
        let position = ledger
            .categories
            .iter()
            .position(|cat| cat.kind == kind && cat.name == old_name)
            .ok_or_else(|| CoreError::CategoryNotFound(old_name.to_string()))?;
        if new_name == old_name {
            return Ok(0);
        }
        if ledger.has_category(kind, new_name) {
            return Err(CoreError::DuplicateCategory(new_name.to_string()));
        }
        ledger.categories[position].name = new_name.to_string();
        let mut cascaded = 0;
        for txn in ledger
            .transactions
            .iter_mut()
            .filter(|txn| txn.kind == kind && txn.category == old_name)
        {
            txn.category = new_name.to_string();
            cascaded += 1;
        }
        ledger.touch();
        debug!(%kind, old_name, new_name, cascaded, "category renamed");
        Ok(cascaded)
    }

    /// Removes a category after verifying no transaction of its kind still
    /// references it. There is no force option; referencing transactions
    /// must be re-pointed first.
    pub fn delete(ledger: &mut Ledger, kind: TransactionKind, name: &str) -> CoreResult<()> {
        if ledger
            .transactions
            .iter()
            .any(|txn| txn.kind == kind && txn.category == name)
        {
            return Err(CoreError::CategoryInUse(name.to_string()));
        }
        let before = ledger.categories.len();
        ledger
            .categories
            .retain(|cat| !(cat.kind == kind && cat.name == name));
        if ledger.categories.len() == before {
            return Err(CoreError::CategoryNotFound(name.to_string()));
        }
        ledger.touch();
        Ok(())
    }

    /// Returns the kind's categories in display order.
    pub fn list(ledger: &Ledger, kind: TransactionKind) -> Vec<&Category> {
        ledger.categories_of(kind).collect()
    }

    fn validate_new_name<'a>(
        ledger: &Ledger,
        kind: TransactionKind,
        candidate: &'a str,
    ) -> CoreResult<&'a str> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidName);
        }
        if ledger.has_category(kind, trimmed) {
            return Err(CoreError::DuplicateCategory(trimmed.to_string()));
        }
        Ok(trimmed)
    }
}
