//! Transfer model as reported by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

/// Backend identifier of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(String);

impl TransferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing state of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransferStatus {
    /// Only pending transfers can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, TransferStatus::Pending)
    }
}

/// A money transfer. Amounts, fee and rate are the backend's committed
/// values, not a local quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: TransferId,
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_email: String,
    pub recipient_country: String,
    #[serde(default)]
    pub recipient_bank_name: String,
    #[serde(default)]
    pub recipient_account_number: String,
    #[serde(default)]
    pub recipient_swift_code: String,
    pub source_currency: CurrencyCode,
    pub dest_currency: CurrencyCode,
    pub source_amount: f64,
    pub dest_amount: f64,
    pub exchange_rate: f64,
    pub fee: f64,
    #[serde(default)]
    pub purpose: String,
    pub status: TransferStatus,
    #[serde(default)]
    pub reference_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_from_backend_json() {
        let json = r#"{
            "id": "tr-42",
            "userId": "u1",
            "recipientName": "Ada Obi",
            "recipientCountry": "NG",
            "recipientBankName": "First Bank",
            "recipientAccountNumber": "0123456789",
            "sourceCurrency": "USD",
            "destCurrency": "NGN",
            "sourceAmount": 500.0,
            "destAmount": 782100.0,
            "exchangeRate": 1580.0,
            "fee": 5.0,
            "purpose": "family",
            "status": "pending",
            "estimatedArrival": "2024-05-01T12:00:00Z",
            "createdAt": "2024-04-30T12:00:00Z"
        }"#;
        let transfer: Transfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.id.as_str(), "tr-42");
        assert_eq!(transfer.dest_currency, CurrencyCode::NGN);
        assert!(transfer.status.is_cancellable());
        assert!(transfer.estimated_arrival.is_some());
    }

    #[test]
    fn test_completed_transfer_not_cancellable() {
        assert!(!TransferStatus::Completed.is_cancellable());
        assert!(!TransferStatus::Cancelled.is_cancellable());
    }
}
