pub mod debt_repository;
pub mod installment_repository;

pub use debt_repository::{DebtRepository, MySqlDebtRepository};
pub use installment_repository::{InstallmentRepository, MySqlInstallmentRepository};
