pub mod debts;
