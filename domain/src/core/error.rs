//! Domain error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid cost: {0} is negative")]
    InvalidCost(Decimal),

    #[error("Invalid temperature: {0} is outside [0.0, 2.0]")]
    InvalidTemperature(f64),

    #[error("Invalid model tier: {0}")]
    InvalidModelTier(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),
}
