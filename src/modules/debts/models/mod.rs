pub mod debt;
pub mod debt_filter;
pub mod dto;
pub mod installment;

pub use debt::{Debt, DebtStatus};
pub use debt_filter::DebtFilter;
pub use dto::{DebtResponse, InstallmentResponse, PayInstallmentRequest, RegisterDebtRequest};
pub use installment::Installment;
