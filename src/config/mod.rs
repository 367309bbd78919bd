use std::env;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{AppError, Result};

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub credit: CreditConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Debt-domain settings
#[derive(Debug, Clone, Deserialize)]
pub struct CreditConfig {
    /// Interest rate in percent applied to installments paid past the due
    /// date; a single flat rate, no compounding
    pub interest_rate: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            credit: CreditConfig {
                interest_rate: env::var("INTEREST_RATE")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid INTEREST_RATE".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.credit.interest_rate < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Interest rate must not be negative".to_string(),
            ));
        }

        if self.credit.interest_rate > Decimal::ONE_HUNDRED {
            return Err(AppError::Configuration(
                "Interest rate must not exceed 100".to_string(),
            ));
        }

        Ok(())
    }
}
