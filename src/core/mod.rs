//! Business logic services operating on an owned [`crate::domain::Ledger`].

pub mod services;
