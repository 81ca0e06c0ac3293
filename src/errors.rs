use thiserror::Error;

/// Unified error type for registry mutations and boundary validation.
///
/// Every variant is recoverable and reported synchronously; no operation
/// leaves partial state behind on failure.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Category name cannot be empty")]
    InvalidName,
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Category `{0}` has linked transactions")]
    CategoryInUse(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Date window end must not precede start")]
    InvalidWindow,
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
