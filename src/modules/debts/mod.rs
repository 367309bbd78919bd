// Debts module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Debt, DebtFilter, DebtStatus, Installment};
pub use repositories::{DebtRepository, InstallmentRepository};
pub use services::DebtService;
