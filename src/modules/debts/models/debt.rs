// Debt aggregate root.
//
// A debt tracks the amount owed to a creditor and is paid down through
// installments. The debt exclusively owns its installment records; they are
// loaded alongside it and never outlive it.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::installment::Installment;

/// Payment-status lifecycle of a debt.
///
/// Statuses persist and serialize as their integer codes so that clients can
/// filter by status id. `Paid` is terminal; a debt never reverts to `Created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum DebtStatus {
    Created = 1,
    PartiallyPaid = 2,
    Paid = 3,
}

impl DebtStatus {
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl From<DebtStatus> for i32 {
    fn from(status: DebtStatus) -> Self {
        status.id()
    }
}

impl TryFrom<i32> for DebtStatus {
    type Error = String;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(DebtStatus::Created),
            2 => Ok(DebtStatus::PartiallyPaid),
            3 => Ok(DebtStatus::Paid),
            _ => Err(format!("Invalid debt status id: {}", value)),
        }
    }
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebtStatus::Created => write!(f, "created"),
            DebtStatus::PartiallyPaid => write!(f, "partially_paid"),
            DebtStatus::Paid => write!(f, "paid"),
        }
    }
}

/// A registered debt owed to a creditor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Debt {
    /// Database-assigned id (0 until first persisted)
    pub id: i64,

    /// Who the money is owed to (max 100 chars)
    pub creditor_name: String,

    /// Original amount owed
    pub total_value: Decimal,

    /// Number of equal installments the debt is split into
    pub number_of_installments: i32,

    /// Paying after this date incurs the overdue interest penalty
    pub due_date: NaiveDate,

    /// Remaining unpaid principal; interest never reduces it
    pub balance_due: Decimal,

    #[sqlx(rename = "status_id", try_from = "i32")]
    pub status: DebtStatus,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,

    /// Payment records, in insertion order (joined from the installments table)
    #[sqlx(skip)]
    #[serde(default)]
    pub installments: Vec<Installment>,
}

impl Debt {
    /// Create a new debt ready for registration: status `Created`, balance
    /// equal to the total value, timestamps set to now.
    pub fn new(
        creditor_name: String,
        total_value: Decimal,
        number_of_installments: i32,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now().naive_utc();

        Self {
            id: 0,
            creditor_name,
            total_value,
            number_of_installments,
            due_date,
            balance_due: total_value,
            status: DebtStatus::Created,
            created_at: now,
            updated_at: now,
            installments: Vec::new(),
        }
    }
}
