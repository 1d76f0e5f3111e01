//! User profile and wallet account models, as returned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub kyc_status: String,
    #[serde(default)]
    pub account_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Lifecycle state of a wallet account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Closed,
    Frozen,
}

/// One currency wallet shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub account_number: String,
    #[serde(default)]
    pub account_type: String,
    pub currency: CurrencyCode,
    pub balance: f64,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AccountSummary {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn display_balance(&self) -> String {
        self.currency.format_amount(self.balance)
    }
}
