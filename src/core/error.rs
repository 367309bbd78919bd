use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// No debt exists with the requested id
    #[error("Debt not found")]
    DebtNotFound,

    /// Payment attempted against a fully settled debt
    #[error("Debt already paid")]
    DebtAlreadyPaid,

    /// Incorrect amount submitted after the due date; carries the
    /// corrected amount and the rate that produced it
    #[error("This debt is overdue, the new value of the installment is {expected} with an interest rate of {interest_rate}%")]
    DebtOverdue {
        expected: Decimal,
        interest_rate: Decimal,
    },

    /// Incorrect amount submitted before the due date
    #[error("The installment value for this debt is: {expected}")]
    IncorrectValue { expected: Decimal },

    /// Validation errors for request data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DebtNotFound => StatusCode::NOT_FOUND,
            AppError::DebtAlreadyPaid => StatusCode::CONFLICT,
            AppError::DebtOverdue { .. } => StatusCode::BAD_REQUEST,
            AppError::IncorrectValue { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
