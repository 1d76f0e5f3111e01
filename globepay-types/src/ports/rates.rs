//! Remote rate gateway port.
//!
//! The backend quotes a rate for a currency pair and amount. Only `rate` is
//! used by the client; the fee and converted amount are recomputed locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

/// Why a live rate could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Rate service unavailable: {0}")]
    Unavailable(String),

    #[error("Rate service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed rate response: {0}")]
    Malformed(String),

    #[error("Rate request timed out")]
    Timeout,
}

/// Body of a successful rate lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<CurrencyCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<CurrencyCode>,
    pub rate: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub amount: f64,
    pub converted_amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl RateQuote {
    /// Rejects rates that cannot be used for pricing.
    pub fn validate(self) -> Result<Self, GatewayError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(GatewayError::Malformed(format!(
                "rate must be a finite positive number, got {}",
                self.rate
            )));
        }
        if !self.converted_amount.is_finite() {
            return Err(GatewayError::Malformed(
                "convertedAmount is not finite".into(),
            ));
        }
        Ok(self)
    }
}

/// Port trait for live exchange rates.
#[async_trait::async_trait]
pub trait RateGateway: Send + Sync {
    /// Fetches the rate for converting `amount` of `from` into `to`.
    async fn fetch_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: f64,
    ) -> Result<RateQuote, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_quote_from_backend_json() {
        let json = r#"{
            "fromCurrency": "USD",
            "toCurrency": "EUR",
            "rate": 0.92,
            "fee": 2.99,
            "amount": 50,
            "convertedAmount": 43.24,
            "timestamp": "2024-03-01T10:00:00Z"
        }"#;
        let quote: RateQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.rate, 0.92);
        assert_eq!(quote.to_currency, Some(CurrencyCode::EUR));
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn test_zero_rate_is_malformed() {
        let quote = RateQuote {
            from_currency: None,
            to_currency: None,
            rate: 0.0,
            fee: 0.0,
            amount: 1.0,
            converted_amount: 0.0,
            timestamp: Utc::now(),
        };
        assert!(matches!(quote.validate(), Err(GatewayError::Malformed(_))));
    }
}
