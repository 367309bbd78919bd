use chrono::NaiveDate;
use serde::Deserialize;

use super::debt::Debt;

/// Optional equality predicates for listing debts.
///
/// Each predicate is independent: an absent field never narrows the result
/// set, and present fields combine with logical AND. The filter itself is
/// pure; the repository compiles it into a WHERE clause.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtFilter {
    pub creditor_name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status_id: Option<i32>,
}

impl DebtFilter {
    /// True when this filter would include the given debt.
    pub fn matches(&self, debt: &Debt) -> bool {
        if let Some(ref creditor_name) = self.creditor_name {
            if debt.creditor_name != *creditor_name {
                return false;
            }
        }

        if let Some(due_date) = self.due_date {
            if debt.due_date != due_date {
                return false;
            }
        }

        if let Some(status_id) = self.status_id {
            if debt.status.id() != status_id {
                return false;
            }
        }

        true
    }
}
