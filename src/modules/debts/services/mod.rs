pub mod debt_service;

pub use debt_service::{installment_amounts, DebtService};
