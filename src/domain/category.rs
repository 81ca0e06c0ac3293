//! Domain types representing tracker categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::TransactionKind;

/// A user-defined label scoped to exactly one transaction kind.
///
/// Names are unique within their kind, not across kinds, and the insertion
/// order of entries is the display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub kind: TransactionKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
