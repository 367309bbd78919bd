// Debt ledger and installment processing.
//
// pay_installment is the decision core: it derives the exact amount the
// caller must pay (nominal share, plus overdue interest when past the due
// date) and rejects anything else. The contract is strict: the nominal
// share and the rate fraction are each rounded half-to-even, their product
// is not re-rounded, and the submitted value must compare equal exactly.
// Callers are expected to compute the same value; there is no tolerance
// band.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::debts::models::{Debt, DebtFilter, DebtStatus, Installment, RegisterDebtRequest};
use crate::modules::debts::repositories::{DebtRepository, InstallmentRepository};

/// Per-installment share of the principal and the exact value a payment
/// must carry at the given interest rate (in percent).
///
/// The share is `total / count` rounded half-to-even to 2 decimal places;
/// the multiplier is `1 + rate / 100` with the division rounded half-to-even
/// to 4 decimal places. The product is deliberately left unrounded.
pub fn installment_amounts(
    total_value: Decimal,
    number_of_installments: i32,
    interest_rate: Decimal,
) -> (Decimal, Decimal) {
    let nominal = (total_value / Decimal::from(number_of_installments))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

    let rate_fraction = (interest_rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(4, RoundingStrategy::MidpointNearestEven);

    let expected = nominal * (Decimal::ONE + rate_fraction);

    (nominal, expected)
}

/// Service owning the debt lifecycle
pub struct DebtService {
    /// Overdue interest rate in percent, injected from configuration
    interest_rate: Decimal,
    debt_repo: Arc<dyn DebtRepository>,
    installment_repo: Arc<dyn InstallmentRepository>,
}

impl DebtService {
    pub fn new(
        debt_repo: Arc<dyn DebtRepository>,
        installment_repo: Arc<dyn InstallmentRepository>,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            interest_rate,
            debt_repo,
            installment_repo,
        }
    }

    /// Register a new debt: status `Created`, balance equal to the total
    /// value. Structural validation has already happened at the boundary.
    pub async fn register_debt(&self, request: RegisterDebtRequest) -> Result<Debt> {
        let debt = Debt::new(
            request.creditor_name,
            request.total_value,
            request.number_of_installments,
            request.due_date,
        );

        let debt = self.debt_repo.save(&debt).await?;

        info!(
            debt_id = debt.id,
            creditor = %debt.creditor_name,
            total = %debt.total_value,
            "Debt registered"
        );

        Ok(debt)
    }

    /// Fetch a single debt with its installments attached
    pub async fn get_debt(&self, id: i64) -> Result<Debt> {
        let mut debt = self
            .debt_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::DebtNotFound)?;

        debt.installments = self.installment_repo.find_by_debt_id(debt.id).await?;

        Ok(debt)
    }

    /// List debts matching every supplied predicate; an empty filter
    /// returns everything
    pub async fn list_debts(&self, filter: &DebtFilter) -> Result<Vec<Debt>> {
        let mut debts = self.debt_repo.find_all(filter).await?;

        for debt in &mut debts {
            debt.installments = self.installment_repo.find_by_debt_id(debt.id).await?;
        }

        Ok(debts)
    }

    /// Apply one installment payment to a debt.
    ///
    /// Fails with `DebtNotFound`, `DebtAlreadyPaid`, `DebtOverdue` or
    /// `IncorrectValue`; no state is written on any failure path. On
    /// success the balance drops by the nominal share (interest is a
    /// penalty, it never reduces principal) and the status becomes `Paid`
    /// when the balance reaches exactly zero, `PartiallyPaid` otherwise.
    pub async fn pay_installment(&self, debt_id: i64, paid_value: Decimal) -> Result<Installment> {
        let mut debt = self
            .debt_repo
            .find_by_id(debt_id)
            .await?
            .ok_or(AppError::DebtNotFound)?;

        if debt.status == DebtStatus::Paid {
            return Err(AppError::DebtAlreadyPaid);
        }

        // Read once and held fixed for every comparison in this operation
        let today = Utc::now().date_naive();

        let overdue = today > debt.due_date;
        let interest_rate = if overdue {
            self.interest_rate
        } else {
            Decimal::ZERO
        };

        let (nominal, expected) =
            installment_amounts(debt.total_value, debt.number_of_installments, interest_rate);

        if paid_value != expected {
            warn!(
                debt_id,
                paid = %paid_value,
                expected = %expected,
                overdue,
                "Installment payment rejected"
            );

            if overdue {
                return Err(AppError::DebtOverdue {
                    expected,
                    interest_rate,
                });
            }
            return Err(AppError::IncorrectValue { expected });
        }

        let observed_balance = debt.balance_due;
        let new_balance = debt.balance_due - nominal;

        debt.balance_due = new_balance;
        debt.status = if new_balance == Decimal::ZERO {
            DebtStatus::Paid
        } else {
            DebtStatus::PartiallyPaid
        };
        debt.updated_at = Utc::now().naive_utc();

        let installment = Installment::new(debt.id, paid_value, interest_rate);
        let installment = self
            .installment_repo
            .record_payment(&debt, observed_balance, &installment)
            .await?;

        info!(
            debt_id,
            installment_id = installment.id,
            value = %installment.value,
            rate = %installment.interest_rate,
            balance = %debt.balance_due,
            status = %debt.status,
            "Installment recorded"
        );

        Ok(installment)
    }
}
