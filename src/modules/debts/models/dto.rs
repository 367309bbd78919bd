// Request and response shapes for the debts API.
//
// Field names are camelCase on the wire. Requests validate their own
// structural constraints before the service runs; business rules live in
// the service.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::debt::Debt;
use super::installment::Installment;
use crate::core::money;
use crate::core::{AppError, Result};

/// Maximum length of a creditor name
const MAX_CREDITOR_NAME_LEN: usize = 100;

/// Body of POST /api/debts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDebtRequest {
    pub creditor_name: String,
    pub total_value: Decimal,
    pub number_of_installments: i32,
    pub due_date: NaiveDate,
}

impl RegisterDebtRequest {
    pub fn validate(&self) -> Result<()> {
        if self.creditor_name.chars().count() > MAX_CREDITOR_NAME_LEN {
            return Err(AppError::validation(format!(
                "creditorName: must have at most {} characters",
                MAX_CREDITOR_NAME_LEN
            )));
        }

        money::validate_amount(self.total_value, "totalValue")?;

        if self.number_of_installments < 1 {
            return Err(AppError::validation(
                "numberOfInstallments: must be a positive integer",
            ));
        }

        Ok(())
    }
}

/// Body of POST /api/debts/{debt_id}/installments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInstallmentRequest {
    pub value: Decimal,
}

impl PayInstallmentRequest {
    pub fn validate(&self) -> Result<()> {
        money::validate_amount(self.value, "value")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtResponse {
    pub id: i64,
    pub creditor_name: String,
    pub total_value: Decimal,
    pub balance_due: Decimal,
    pub number_of_installments: i32,
    pub due_date: NaiveDate,
    pub installments: Vec<InstallmentResponse>,
    pub status_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&Debt> for DebtResponse {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            creditor_name: debt.creditor_name.clone(),
            total_value: debt.total_value,
            balance_due: debt.balance_due,
            number_of_installments: debt.number_of_installments,
            due_date: debt.due_date,
            installments: debt.installments.iter().map(Into::into).collect(),
            status_id: debt.status.id(),
            created_at: debt.created_at,
            updated_at: debt.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentResponse {
    pub id: i64,
    pub value: Decimal,
    pub interest_rate: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<&Installment> for InstallmentResponse {
    fn from(installment: &Installment) -> Self {
        Self {
            id: installment.id,
            value: installment.value,
            interest_rate: installment.interest_rate,
            created_at: installment.created_at,
        }
    }
}
