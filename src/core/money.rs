use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};

/// Monetary amounts carry at most 2 fraction digits
pub const MONEY_SCALE: u32 = 2;

/// and at most 7 integer digits
pub const MAX_INTEGER_DIGITS: u32 = 7;

/// Validates that an amount fits the monetary column type: up to 7 integer
/// digits and 2 fraction digits (DECIMAL(9,2)).
pub fn validate_amount(amount: Decimal, field: &str) -> Result<()> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AppError::validation(format!(
            "{}: must have at most {} decimal places",
            field, MONEY_SCALE
        )));
    }

    let limit = Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS));
    if amount.abs().trunc() >= limit {
        return Err(AppError::validation(format!(
            "{}: must have at most {} integer digits",
            field, MAX_INTEGER_DIGITS
        )));
    }

    Ok(())
}
