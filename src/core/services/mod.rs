pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use summary_service::{AggregationMode, CategoryTotals, SplitTotals, SummaryService};
pub use transaction_service::TransactionService;
