// Debt persistence.
//
// The service talks to the trait; MySqlDebtRepository is the production
// implementation. `find_all` compiles the pure DebtFilter into a WHERE
// clause, so absent predicates never reach the database.

use async_trait::async_trait;
use sqlx::{MySqlPool, QueryBuilder};

use crate::core::{AppError, Result};
use crate::modules::debts::models::{Debt, DebtFilter};

const SELECT_DEBT: &str = "SELECT id, creditor_name, total_value, number_of_installments, \
     due_date, balance_due, status_id, created_at, updated_at FROM debts";

/// Storage collaborator for debts
#[async_trait]
pub trait DebtRepository: Send + Sync {
    /// Find a debt by id, without its installments
    async fn find_by_id(&self, id: i64) -> Result<Option<Debt>>;

    /// Insert (id == 0) or update a debt, returning it with its assigned id
    async fn save(&self, debt: &Debt) -> Result<Debt>;

    /// List debts matching every predicate of the filter
    async fn find_all(&self, filter: &DebtFilter) -> Result<Vec<Debt>>;
}

/// MySQL-backed debt repository
pub struct MySqlDebtRepository {
    pool: MySqlPool,
}

impl MySqlDebtRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DebtRepository for MySqlDebtRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Debt>> {
        let debt = sqlx::query_as::<_, Debt>(&format!("{} WHERE id = ?", SELECT_DEBT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::internal(format!("Failed to fetch debt: {}", e)))?;

        Ok(debt)
    }

    async fn save(&self, debt: &Debt) -> Result<Debt> {
        if debt.id == 0 {
            let result = sqlx::query(
                r#"
                INSERT INTO debts (
                    creditor_name, total_value, number_of_installments, due_date,
                    balance_due, status_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&debt.creditor_name)
            .bind(debt.total_value)
            .bind(debt.number_of_installments)
            .bind(debt.due_date)
            .bind(debt.balance_due)
            .bind(debt.status.id())
            .bind(debt.created_at)
            .bind(debt.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::internal(format!("Failed to insert debt: {}", e)))?;

            let mut saved = debt.clone();
            saved.id = result.last_insert_id() as i64;

            Ok(saved)
        } else {
            sqlx::query(
                r#"
                UPDATE debts
                SET creditor_name = ?, total_value = ?, number_of_installments = ?,
                    due_date = ?, balance_due = ?, status_id = ?, updated_at = ?
                WHERE id = ?
                "#,
            )
            .bind(&debt.creditor_name)
            .bind(debt.total_value)
            .bind(debt.number_of_installments)
            .bind(debt.due_date)
            .bind(debt.balance_due)
            .bind(debt.status.id())
            .bind(debt.updated_at)
            .bind(debt.id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::internal(format!("Failed to update debt: {}", e)))?;

            Ok(debt.clone())
        }
    }

    async fn find_all(&self, filter: &DebtFilter) -> Result<Vec<Debt>> {
        let mut query = QueryBuilder::new(SELECT_DEBT);
        let mut separator = " WHERE ";

        if let Some(ref creditor_name) = filter.creditor_name {
            query.push(separator).push("creditor_name = ").push_bind(creditor_name);
            separator = " AND ";
        }

        if let Some(due_date) = filter.due_date {
            query.push(separator).push("due_date = ").push_bind(due_date);
            separator = " AND ";
        }

        if let Some(status_id) = filter.status_id {
            query.push(separator).push("status_id = ").push_bind(status_id);
        }

        query.push(" ORDER BY id");

        let debts = query
            .build_query_as::<Debt>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::internal(format!("Failed to list debts: {}", e)))?;

        Ok(debts)
    }
}
