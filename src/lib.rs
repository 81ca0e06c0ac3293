#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the ledger, category, and summary primitives that
//! power a session-scoped income/expense tracker UI.

pub mod core;
pub mod domain;
pub mod errors;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
