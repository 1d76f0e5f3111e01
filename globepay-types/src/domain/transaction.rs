//! Transaction history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

/// Direction of a ledger entry relative to the user's wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

/// Settlement state of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// One row of the user's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub amount: f64,
    pub currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Amount with sign applied: debits are negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_from_backend_json() {
        let json = r#"{
            "id": "t1",
            "type": "debit",
            "status": "COMPLETED",
            "amount": 120.0,
            "currency": "USD",
            "fee": 1.2,
            "description": "Transfer to Ada",
            "reference": "REF-1"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionType::Debit);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.signed_amount(), -120.0);
        assert_eq!(tx.fee, Some(1.2));
        assert!(tx.exchange_rate.is_none());
    }
}
