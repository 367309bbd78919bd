//! Debtrack debt ledger library
//!
//! Tracks debts owed to creditors, records installment payments against
//! them and applies a configurable interest penalty to overdue payments.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::debts;
