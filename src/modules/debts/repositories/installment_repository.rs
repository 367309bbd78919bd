// Installment persistence.
//
// `record_payment` writes the updated debt and the new installment in a
// single transaction: a payment is either fully applied or not visible at
// all. The debt UPDATE is guarded by the balance the caller read
// (`observed_balance`): a concurrent payment that already moved the
// balance makes the guard miss, the transaction rolls back and nothing is
// recorded, so no payment is ever applied on top of a stale read.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::debts::models::{Debt, Installment};

/// Storage collaborator for installment payment records
#[async_trait]
pub trait InstallmentRepository: Send + Sync {
    /// Atomically persist the debt's post-payment state together with the
    /// new installment record. `observed_balance` is the balance the
    /// caller computed the new state from; the write fails without effect
    /// if the stored balance no longer matches it.
    async fn record_payment(
        &self,
        debt: &Debt,
        observed_balance: Decimal,
        installment: &Installment,
    ) -> Result<Installment>;

    /// All installments of a debt, in insertion order
    async fn find_by_debt_id(&self, debt_id: i64) -> Result<Vec<Installment>>;
}

/// MySQL-backed installment repository
pub struct MySqlInstallmentRepository {
    pool: MySqlPool,
}

impl MySqlInstallmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstallmentRepository for MySqlInstallmentRepository {
    async fn record_payment(
        &self,
        debt: &Debt,
        observed_balance: Decimal,
        installment: &Installment,
    ) -> Result<Installment> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start transaction: {}", e)))?;

        let updated = sqlx::query(
            r#"
            UPDATE debts
            SET balance_due = ?, status_id = ?, updated_at = ?
            WHERE id = ? AND balance_due = ?
            "#,
        )
        .bind(debt.balance_due)
        .bind(debt.status.id())
        .bind(debt.updated_at)
        .bind(debt.id)
        .bind(observed_balance)
        .execute(tx.as_mut())
        .await
        .map_err(|e| AppError::internal(format!("Failed to update debt: {}", e)))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::internal(format!(
                "Debt {} was updated concurrently, payment not applied",
                debt.id
            )));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO installments (`value`, interest_rate, debt_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(installment.value)
        .bind(installment.interest_rate)
        .bind(installment.debt_id)
        .bind(installment.created_at)
        .execute(tx.as_mut())
        .await
        .map_err(|e| AppError::internal(format!("Failed to insert installment: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::internal(format!("Failed to commit transaction: {}", e)))?;

        let mut saved = installment.clone();
        saved.id = result.last_insert_id() as i64;

        Ok(saved)
    }

    async fn find_by_debt_id(&self, debt_id: i64) -> Result<Vec<Installment>> {
        let installments = sqlx::query_as::<_, Installment>(
            r#"
            SELECT id, `value`, interest_rate, debt_id, created_at
            FROM installments
            WHERE debt_id = ?
            ORDER BY id
            "#,
        )
        .bind(debt_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::internal(format!("Failed to fetch installments: {}", e)))?;

        Ok(installments)
    }
}
