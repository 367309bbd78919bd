use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One discrete payment event against a debt's balance.
///
/// Append-only: an installment is created exactly once per successful
/// payment and never updated or deleted. The `debt_id` back-reference exists
/// for lookup only; the owning debt controls its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Installment {
    /// Database-assigned id (0 until persisted)
    pub id: i64,

    /// Amount actually paid, interest included
    pub value: Decimal,

    /// Interest rate applied to this payment; 0 when paid on time
    pub interest_rate: Decimal,

    /// Owning debt
    pub debt_id: i64,

    pub created_at: NaiveDateTime,
}

impl Installment {
    pub fn new(debt_id: i64, value: Decimal, interest_rate: Decimal) -> Self {
        Self {
            id: 0,
            value,
            interest_rate,
            debt_id,
            created_at: Utc::now().naive_utc(),
        }
    }
}
