//! Monetary amount tagged with its currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use globepay_currencies::CurrencyCode;

use crate::error::DomainError;

/// A non-negative, finite amount in a supported currency.
///
/// Amounts are carried in major units as `f64`, matching what the backend
/// sends and accepts. Rounding happens only when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    value: f64,
    currency: CurrencyCode,
}

impl Amount {
    /// Creates a new Amount.
    pub fn new(value: f64, currency: CurrencyCode) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteAmount);
        }
        if value < 0.0 {
            return Err(DomainError::NegativeAmount(value));
        }
        Ok(Self { value, currency })
    }

    /// Creates a zero amount for the given currency.
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            value: 0.0,
            currency,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currency.format_amount(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_creation() {
        let amount = Amount::new(10.5, CurrencyCode::USD).unwrap();
        assert_eq!(amount.value(), 10.5);
        assert_eq!(amount.currency(), CurrencyCode::USD);
    }

    #[test]
    fn test_negative_amount_fails() {
        let result = Amount::new(-1.0, CurrencyCode::USD);
        assert!(matches!(result, Err(DomainError::NegativeAmount(_))));
    }

    #[test]
    fn test_non_finite_amount_fails() {
        assert_eq!(
            Amount::new(f64::NAN, CurrencyCode::EUR),
            Err(DomainError::NonFiniteAmount)
        );
        assert_eq!(
            Amount::new(f64::INFINITY, CurrencyCode::EUR),
            Err(DomainError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_zero_is_allowed() {
        assert!(Amount::new(0.0, CurrencyCode::GBP).unwrap().is_zero());
        assert!(Amount::zero(CurrencyCode::GBP).is_zero());
    }

    #[test]
    fn test_amount_display() {
        let amount = Amount::new(1050.0, CurrencyCode::USD).unwrap();
        assert_eq!(format!("{}", amount), "$1050.00");
    }
}
