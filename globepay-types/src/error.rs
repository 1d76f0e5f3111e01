//! Error types for the Globepay client core.

use globepay_currencies::UnknownCurrency;

/// Domain-level errors (value invariants).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(f64),

    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Errors that block quote generation.
///
/// Rate service failures are deliberately absent: those are recovered with
/// the fallback table and never surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(f64),

    #[error("Exchange rate must be a finite positive number, got {0}")]
    InvalidRate(f64),

    #[error("Missing {0} currency")]
    MissingCurrency(&'static str),

    #[error(transparent)]
    UnsupportedCurrency(#[from] UnknownCurrency),
}

impl From<DomainError> for QuoteError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NegativeAmount(v) => QuoteError::InvalidAmount(v),
            DomainError::NonFiniteAmount => QuoteError::InvalidAmount(f64::NAN),
            DomainError::ValidationError(_) => QuoteError::InvalidAmount(f64::NAN),
        }
    }
}
