//! Plain-data models shared with the presentation layer.

pub mod category;
pub mod common;
pub mod ledger;
pub mod transaction;
pub mod window;

pub use category::Category;
pub use common::{TimePeriod, TransactionKind};
pub use ledger::Ledger;
pub use transaction::Transaction;
pub use window::{DateWindow, WindowSelection};
